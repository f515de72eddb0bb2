use super::types::{CartError, CartItem};

use async_trait::async_trait;

/// Common interface of the stateful and the stateless cart.
#[async_trait]
pub trait CartStore: Send + Sync + 'static {
    /// Short label used in log lines ("in-process", "external").
    fn kind(&self) -> &'static str;

    /// Returns the whole cart in insertion order.
    async fn list(&self) -> Result<Vec<CartItem>, CartError>;

    /// Appends `item` to the tail and returns the cart as read afterwards.
    ///
    /// Fails with [`CartError::MissingItem`] for an empty item, leaving the cart untouched.
    async fn append(&self, item: &str) -> Result<Vec<CartItem>, CartError>;
}
