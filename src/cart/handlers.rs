use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
};
use std::sync::Arc;

use super::protocol::{AddToCartRequest, AddToCartResponse};
use super::store::CartStore;
use super::types::CartItem;
use crate::error::{AppError, AppResult};

// Generic handlers, instantiated per store in `router::build_router`.
pub async fn handle_get_cart<S: CartStore>(
    Extension(store): Extension<Arc<S>>,
) -> AppResult<Json<Vec<CartItem>>> {
    let cart = store.list().await?;
    tracing::debug!("{} cart read: {} items", store.kind(), cart.len());
    Ok(Json(cart))
}

pub async fn handle_add_to_cart<S: CartStore>(
    Extension(store): Extension<Arc<S>>,
    body: Result<Json<AddToCartRequest>, JsonRejection>,
) -> AppResult<Json<AddToCartResponse>> {
    let Json(req) = body.map_err(|e| AppError::InvalidBody(e.body_text()))?;
    let item = req.item.unwrap_or_default();

    let cart = store.append(&item).await?;
    tracing::info!(
        "Added '{}' to {} cart ({} items)",
        item,
        store.kind(),
        cart.len()
    );

    Ok(Json(AddToCartResponse::success(cart)))
}
