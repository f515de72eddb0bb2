//! HTTP routing.
//!
//! Wires every endpoint to its handler and injects the shared components as
//! axum extensions. Cart handlers are generic and instantiated once per store.

use crate::cart::external::{ExternalCartStore, ListStore};
use crate::cart::handlers::{handle_add_to_cart, handle_get_cart};
use crate::cart::memory::InProcessCartStore;
use crate::cart::protocol::{
    ENDPOINT_ADD_TO_CART_SF, ENDPOINT_ADD_TO_CART_SL, ENDPOINT_GET_CART_SF, ENDPOINT_GET_CART_SL,
};
use crate::greeting::{ENDPOINT_GREETING, handle_greeting};
use crate::instance::{INSTANCE_HEADER, InstanceId};
use crate::mlp::handlers::handle_fashion_mlp;
use crate::mlp::trainer::ModelTrainer;
use crate::mlp::types::ENDPOINT_FASHION_MLP;
use crate::perfect::handlers::handle_perfect_numbers;
use crate::perfect::types::ENDPOINT_PERFECT_NUMBERS;

use axum::{
    Router,
    extract::Extension,
    http::HeaderName,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

/// Components shared by all requests served by this instance.
pub struct AppState<L> {
    pub instance: InstanceId,
    pub memory_cart: Arc<InProcessCartStore>,
    pub external_cart: Arc<ExternalCartStore<L>>,
    pub trainer: Arc<dyn ModelTrainer>,
}

pub fn build_router<L: ListStore>(state: AppState<L>) -> Router {
    Router::new()
        .route(ENDPOINT_GREETING, get(handle_greeting))
        .route(ENDPOINT_PERFECT_NUMBERS, get(handle_perfect_numbers))
        .route(ENDPOINT_FASHION_MLP, get(handle_fashion_mlp))
        .route(
            ENDPOINT_GET_CART_SF,
            get(handle_get_cart::<InProcessCartStore>),
        )
        .route(
            ENDPOINT_ADD_TO_CART_SF,
            post(handle_add_to_cart::<InProcessCartStore>),
        )
        .route(
            ENDPOINT_GET_CART_SL,
            get(handle_get_cart::<ExternalCartStore<L>>),
        )
        .route(
            ENDPOINT_ADD_TO_CART_SL,
            post(handle_add_to_cart::<ExternalCartStore<L>>),
        )
        .layer(Extension(state.memory_cart))
        .layer(Extension(state.external_cart))
        .layer(Extension(state.trainer))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static(INSTANCE_HEADER),
            state.instance.header_value(),
        ))
        .layer(TraceLayer::new_for_http())
}
