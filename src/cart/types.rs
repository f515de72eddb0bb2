use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An opaque product identifier placed in a cart.
///
/// The only rule is that it is not empty. Items are never deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItem(pub String);

impl CartItem {
    pub fn new(raw: &str) -> Result<Self, CartError> {
        if raw.is_empty() {
            return Err(CartError::MissingItem);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CartItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("No item found in the request")]
    MissingItem,

    #[error("cart store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("stored cart entry is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
