//! Stateful cart kept in process memory.
//!
//! One instance is created at startup and shared by every request this process
//! serves. Other replicas of the service have their own, unrelated instance.

use super::store::CartStore;
use super::types::{CartError, CartItem};

use async_trait::async_trait;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct InProcessCartStore {
    items: RwLock<Vec<CartItem>>,
}

impl InProcessCartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> Vec<CartItem> {
        self.items.read().clone()
    }

    /// Pushes `item` and then reads the cart back.
    ///
    /// The push and the read are separate steps: an append from a concurrent
    /// request can land in between and show up in this call's result.
    pub fn append(&self, item: &str) -> Result<Vec<CartItem>, CartError> {
        let item = CartItem::new(item)?;
        self.items.write().push(item);
        Ok(self.list())
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

#[async_trait]
impl CartStore for InProcessCartStore {
    fn kind(&self) -> &'static str {
        "in-process"
    }

    async fn list(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(InProcessCartStore::list(self))
    }

    async fn append(&self, item: &str) -> Result<Vec<CartItem>, CartError> {
        InProcessCartStore::append(self, item)
    }
}
