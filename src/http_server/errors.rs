//! API error types
//!
//! The catalog API has exactly one error kind: not found. Malformed
//! query values never error; they degrade to defaults in the parameter
//! layer. Errors are returned as values and rendered as a structured
//! `{"message": ...}` body with a 404 status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::MessageBody;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Not-found conditions surfaced by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No item with the requested id
    #[error("Product not found")]
    ProductNotFound,

    /// No items carry the promotional flag
    #[error("Items not found")]
    ItemsNotFound,

    /// The type/category grouping is empty
    #[error("Types and categories not found")]
    GroupingNotFound,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ProductNotFound => StatusCode::NOT_FOUND,
            ApiError::ItemsNotFound => StatusCode::NOT_FOUND,
            ApiError::GroupingNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageBody::new(self.to_string()));
        (status, body).into_response()
    }
}
