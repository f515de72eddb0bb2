//! Cart Module Tests
//!
//! Validates both cart flavours and the contrast between them.
//!
//! ## Test Scopes
//! - **InProcessCartStore**: ordering, validation, and per-instance isolation.
//! - **ExternalCartStore**: translation onto list primitives, decoding, and
//!   sharing between instances that point at the same store.
//! - **Protocol**: JSON shapes of requests and responses.
//!
//! *Note: the external store is exercised through an in-memory `ListStore`;
//! the Redis adapter itself is covered by the HTTP tests for the unreachable case.*

#[cfg(test)]
mod tests {
    use crate::cart::external::{DEFAULT_CART_KEY, ExternalCartStore, ListStore};
    use crate::cart::memory::InProcessCartStore;
    use crate::cart::protocol::{AddToCartRequest, AddToCartResponse};
    use crate::cart::store::CartStore;
    use crate::cart::types::{CartError, CartItem};
    use async_trait::async_trait;
    use dashmap::DashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    /// In-memory stand-in for Redis lists.
    #[derive(Default)]
    struct FakeListStore {
        lists: DashMap<String, Vec<Vec<u8>>>,
        down: AtomicBool,
    }

    impl FakeListStore {
        fn check_up(&self) -> Result<(), CartError> {
            if self.down.load(Ordering::SeqCst) {
                return Err(CartError::StoreUnavailable("connection refused".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ListStore for FakeListStore {
        async fn push_tail(&self, key: &str, value: &str) -> Result<(), CartError> {
            self.check_up()?;
            self.lists
                .entry(key.to_string())
                .or_default()
                .push(value.as_bytes().to_vec());
            Ok(())
        }

        async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CartError> {
            self.check_up()?;
            Ok(self
                .lists
                .get(key)
                .map(|list| list.value().clone())
                .unwrap_or_default())
        }
    }

    fn items(raw: &[&str]) -> Vec<CartItem> {
        raw.iter().map(|s| CartItem(s.to_string())).collect()
    }

    // ============================================================
    // IN-PROCESS (STATEFUL) CART
    // ============================================================

    #[test]
    fn test_in_process_starts_empty() {
        let store = InProcessCartStore::new();

        assert!(store.is_empty());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_in_process_preserves_insertion_order() {
        // ARRANGE
        let store = InProcessCartStore::new();

        // ACT
        store.append("apple").unwrap();
        let after_second = store.append("banana").unwrap();

        // ASSERT
        assert_eq!(after_second, items(&["apple", "banana"]));
        assert_eq!(store.list(), items(&["apple", "banana"]));
    }

    #[test]
    fn test_in_process_keeps_duplicates() {
        let store = InProcessCartStore::new();

        store.append("apple").unwrap();
        store.append("apple").unwrap();

        assert_eq!(store.list(), items(&["apple", "apple"]));
    }

    #[test]
    fn test_in_process_empty_item_is_rejected_without_mutation() {
        // ARRANGE
        let store = InProcessCartStore::new();
        store.append("apple").unwrap();

        // ACT
        let result = store.append("");

        // ASSERT
        assert!(matches!(result, Err(CartError::MissingItem)));
        assert_eq!(store.len(), 1, "A rejected append must not change the cart");
    }

    #[test]
    fn test_in_process_instances_do_not_share_state() {
        // Two stores stand in for two replicas of the service.
        let instance_a = InProcessCartStore::new();
        let instance_b = InProcessCartStore::new();

        instance_a.append("apple").unwrap();

        assert_eq!(instance_a.list(), items(&["apple"]));
        assert!(
            instance_b.list().is_empty(),
            "A second instance must not see the first instance's cart"
        );
    }

    #[tokio::test]
    async fn test_in_process_through_trait() {
        let store = InProcessCartStore::new();

        let cart = CartStore::append(&store, "pear").await.unwrap();
        let listed = CartStore::list(&store).await.unwrap();

        assert_eq!(cart, listed);
        assert_eq!(store.kind(), "in-process");
    }

    #[tokio::test]
    async fn test_in_process_concurrent_appends_are_all_kept() {
        // Each push is applied; only the read-back after a push may include
        // items appended concurrently by other requests.
        let store = Arc::new(InProcessCartStore::new());
        let mut handles = Vec::new();

        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.append(&format!("item-{}", i)).unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 16);
    }

    // ============================================================
    // EXTERNAL (STATELESS) CART
    // ============================================================

    #[tokio::test]
    async fn test_external_empty_key_lists_empty() {
        let store = ExternalCartStore::new(FakeListStore::default(), DEFAULT_CART_KEY);

        let cart = store.list().await.unwrap();

        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_external_append_lands_at_tail() {
        // ARRANGE
        let store = ExternalCartStore::new(FakeListStore::default(), DEFAULT_CART_KEY);
        store.append("apple").await.unwrap();

        // ACT
        let cart = store.append("banana").await.unwrap();

        // ASSERT
        assert_eq!(cart, items(&["apple", "banana"]));
        assert_eq!(store.list().await.unwrap(), items(&["apple", "banana"]));
    }

    #[tokio::test]
    async fn test_external_writes_under_configured_key() {
        let backend = Arc::new(FakeListStore::default());
        let store = ExternalCartStore::new(backend.clone(), "cart:test");

        store.append("apple").await.unwrap();

        assert_eq!(store.key(), "cart:test");
        assert!(backend.lists.contains_key("cart:test"));
        assert!(!backend.lists.contains_key(DEFAULT_CART_KEY));
    }

    #[tokio::test]
    async fn test_external_instances_share_state() {
        // Two adapters over one store behave like two replicas behind a load balancer.
        let backend = Arc::new(FakeListStore::default());
        let instance_a = ExternalCartStore::new(backend.clone(), DEFAULT_CART_KEY);
        let instance_b = ExternalCartStore::new(backend.clone(), DEFAULT_CART_KEY);

        instance_a.append("apple").await.unwrap();
        let cart = instance_b.append("banana").await.unwrap();

        assert_eq!(cart, items(&["apple", "banana"]));
        assert_eq!(instance_a.list().await.unwrap(), cart);
    }

    #[tokio::test]
    async fn test_external_empty_item_is_rejected_before_store() {
        let backend = Arc::new(FakeListStore::default());
        backend.down.store(true, Ordering::SeqCst);
        let store = ExternalCartStore::new(backend, DEFAULT_CART_KEY);

        let result = store.append("").await;

        assert!(
            matches!(result, Err(CartError::MissingItem)),
            "Validation must happen before touching the store"
        );
    }

    #[tokio::test]
    async fn test_external_store_down_is_reported() {
        let backend = Arc::new(FakeListStore::default());
        backend.down.store(true, Ordering::SeqCst);
        let store = ExternalCartStore::new(backend, DEFAULT_CART_KEY);

        assert!(matches!(
            store.list().await,
            Err(CartError::StoreUnavailable(_))
        ));
        assert!(matches!(
            store.append("apple").await,
            Err(CartError::StoreUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_external_invalid_utf8_fails_to_decode() {
        let backend = Arc::new(FakeListStore::default());
        backend
            .lists
            .insert(DEFAULT_CART_KEY.to_string(), vec![vec![0xff, 0xfe]]);
        let store = ExternalCartStore::new(backend, DEFAULT_CART_KEY);

        let result = store.list().await;

        assert!(matches!(result, Err(CartError::Decode(_))));
    }

    // ============================================================
    // PROTOCOL
    // ============================================================

    #[test]
    fn test_cart_item_validation() {
        assert!(CartItem::new("sku-1").is_ok());
        assert!(CartItem::new(" ").is_ok(), "Only the empty string is missing");
        assert!(matches!(CartItem::new(""), Err(CartError::MissingItem)));
    }

    #[test]
    fn test_add_request_tolerates_missing_item() {
        let empty: AddToCartRequest = serde_json::from_str("{}").unwrap();
        let null: AddToCartRequest = serde_json::from_str(r#"{"item": null}"#).unwrap();
        let present: AddToCartRequest = serde_json::from_str(r#"{"item": "apple"}"#).unwrap();

        assert!(empty.item.is_none());
        assert!(null.item.is_none());
        assert_eq!(present.item.as_deref(), Some("apple"));
    }

    #[test]
    fn test_add_response_shape() {
        let response = AddToCartResponse::success(items(&["apple"]));

        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "status": "success",
                "message": "Item added to cart",
                "cart": ["apple"]
            })
        );
    }
}
