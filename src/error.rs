use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::cart::types::CartError;
use crate::mlp::types::TrainError;
use crate::perfect::types::PerfectError;

/// Errors surfaced at the HTTP boundary.
///
/// Client-input errors are reported back verbatim with a 400. Infrastructure
/// errors are logged and answered with a generic 500 body.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("No item found in the request")]
    MissingField,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter(_) | AppError::MissingField | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::StoreUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            tracing::debug!("Rejected request: {}", self);
            self.to_string()
        };

        let body = Json(json!({
            "status": "error",
            "message": message,
        }));

        (status, body).into_response()
    }
}

impl From<CartError> for AppError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::MissingItem => AppError::MissingField,
            CartError::StoreUnavailable(reason) => AppError::StoreUnavailable(reason),
            CartError::Decode(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl From<PerfectError> for AppError {
    fn from(err: PerfectError) -> Self {
        AppError::InvalidParameter(err.to_string())
    }
}

impl From<TrainError> for AppError {
    fn from(err: TrainError) -> Self {
        match err {
            TrainError::InvalidSetting { .. } => AppError::InvalidParameter(err.to_string()),
            TrainError::Unavailable(reason) => AppError::ModelUnavailable(reason),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Internal(format!("blocking task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
