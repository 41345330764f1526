//! API error type and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use market_core::ListingError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// The JSON body carries the message under a `detail` key, which is the
/// shape existing clients of this API already parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
}

impl From<ListingError> for ApiError {
    fn from(err: ListingError) -> Self {
        match err {
            ListingError::UnknownSymbol { .. } => ApiError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
