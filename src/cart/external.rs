//! Stateless cart kept in an external list store.
//!
//! `ExternalCartStore` only translates cart operations into two list
//! primitives (tail push, full-range read) on a fixed key. Ordering across
//! instances is whatever the store guarantees for a single key.

use super::store::CartStore;
use super::types::{CartError, CartItem};

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Key used for the shared cart when none is configured.
pub const DEFAULT_CART_KEY: &str = "cart";

/// The two list operations the stateless cart needs from its backing store.
#[async_trait]
pub trait ListStore: Send + Sync + 'static {
    /// Appends `value` to the tail of the list at `key`, creating it if needed.
    async fn push_tail(&self, key: &str, value: &str) -> Result<(), CartError>;

    /// Returns every entry of the list at `key`; an absent key is an empty list.
    async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CartError>;
}

#[async_trait]
impl<T: ListStore + ?Sized> ListStore for Arc<T> {
    async fn push_tail(&self, key: &str, value: &str) -> Result<(), CartError> {
        (**self).push_tail(key, value).await
    }

    async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CartError> {
        (**self).range_all(key).await
    }
}

/// Redis-backed [`ListStore`].
///
/// Holds a client, not a connection: a connection is opened per operation, so
/// the service starts and keeps serving its other endpoints while Redis is down.
pub struct RedisListStore {
    client: redis::Client,
    timeout: Duration,
}

impl RedisListStore {
    /// Validates `url` without connecting.
    pub fn open(url: &str, timeout: Duration) -> Result<Self, CartError> {
        let client =
            redis::Client::open(url).map_err(|e| CartError::StoreUnavailable(e.to_string()))?;
        Ok(Self { client, timeout })
    }

    async fn connection(&self) -> Result<MultiplexedConnection, CartError> {
        self.bounded("connect", self.client.get_multiplexed_async_connection())
            .await
    }

    async fn bounded<T, F>(&self, op: &str, fut: F) -> Result<T, CartError>
    where
        F: Future<Output = redis::RedisResult<T>>,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                tracing::warn!("Redis {} failed: {}", op, e);
                Err(CartError::StoreUnavailable(format!("{}: {}", op, e)))
            }
            Err(_) => {
                tracing::warn!("Redis {} timed out after {:?}", op, self.timeout);
                Err(CartError::StoreUnavailable(format!(
                    "{} timed out after {:?}",
                    op, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl ListStore for RedisListStore {
    async fn push_tail(&self, key: &str, value: &str) -> Result<(), CartError> {
        let mut conn = self.connection().await?;
        let length: i64 = self.bounded("RPUSH", conn.rpush(key, value)).await?;
        tracing::debug!("RPUSH {} -> length {}", key, length);
        Ok(())
    }

    async fn range_all(&self, key: &str) -> Result<Vec<Vec<u8>>, CartError> {
        let mut conn = self.connection().await?;
        self.bounded("LRANGE", conn.lrange(key, 0, -1)).await
    }
}

/// Cart stored as a list under a single shared key.
pub struct ExternalCartStore<S> {
    backend: S,
    key: String,
}

impl<S: ListStore> ExternalCartStore<S> {
    pub fn new(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn decode(raw: Vec<Vec<u8>>) -> Result<Vec<CartItem>, CartError> {
        raw.into_iter()
            .map(|bytes| String::from_utf8(bytes).map(CartItem).map_err(CartError::from))
            .collect()
    }
}

#[async_trait]
impl<S: ListStore> CartStore for ExternalCartStore<S> {
    fn kind(&self) -> &'static str {
        "external"
    }

    async fn list(&self) -> Result<Vec<CartItem>, CartError> {
        let raw = self.backend.range_all(&self.key).await?;
        Self::decode(raw)
    }

    /// Push and re-read are not atomic; another instance's append may be
    /// interleaved between them.
    async fn append(&self, item: &str) -> Result<Vec<CartItem>, CartError> {
        let item = CartItem::new(item)?;
        self.backend.push_tail(&self.key, item.as_str()).await?;
        self.list().await
    }
}
