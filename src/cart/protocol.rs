//! Cart HTTP Protocol
//!
//! Endpoint paths and the request/response bodies of the cart API.

use super::types::CartItem;
use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Read the cart held by the serving instance.
pub const ENDPOINT_GET_CART_SF: &str = "/get_cart_SF";
/// Append to the cart held by the serving instance.
pub const ENDPOINT_ADD_TO_CART_SF: &str = "/add_to_cart_SF";
/// Read the cart held in the external store.
pub const ENDPOINT_GET_CART_SL: &str = "/get_cart_SL";
/// Append to the cart held in the external store.
pub const ENDPOINT_ADD_TO_CART_SL: &str = "/add_to_cart_SL";

// --- Data Transfer Objects ---

/// Body of an add-to-cart request: `{"item": "..."}`.
///
/// `item` is optional at the wire level so that a missing or null item is
/// reported as a missing field rather than a malformed body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AddToCartRequest {
    #[serde(default)]
    pub item: Option<String>,
}

/// Successful add-to-cart acknowledgement including the cart as read back.
#[derive(Debug, Serialize, Deserialize)]
pub struct AddToCartResponse {
    pub status: String,
    pub message: String,
    pub cart: Vec<CartItem>,
}

impl AddToCartResponse {
    pub fn success(cart: Vec<CartItem>) -> Self {
        Self {
            status: "success".to_string(),
            message: "Item added to cart".to_string(),
            cart,
        }
    }
}
