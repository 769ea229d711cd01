//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::repository::RepositoryError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
///
/// Every handler failure is a repository failure, collapsed into the
/// two-tier taxonomy the API exposes: the typed `NotFound` variant becomes
/// 404, everything else becomes 500 with a generic message (the cause is
/// logged, not returned).
#[derive(Debug)]
pub struct AppError(RepositoryError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = if self.0.is_not_found() {
            (
                StatusCode::NOT_FOUND,
                ApiError::new("NOT_FOUND", self.0.to_string()),
            )
        } else {
            tracing::error!(error = %self.0, "repository error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", "Internal server error"),
            )
        };

        (status, Json(error)).into_response()
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError(err)
    }
}
