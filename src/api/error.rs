use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::flower_actor::FlowerError;
use crate::order_actor::OrderError;

/// Error surfaced to HTTP callers as `{"detail": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(&'static str),
    /// Details are logged, never returned.
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail),
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail.to_string()),
            ApiError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string()),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        if e.is_client_error() {
            ApiError::BadRequest(e.to_string())
        } else {
            error!(error = %e, "Order request failed");
            ApiError::Internal
        }
    }
}

impl From<FlowerError> for ApiError {
    fn from(e: FlowerError) -> Self {
        error!(error = %e, "Flower request failed");
        ApiError::Internal
    }
}
