//! Error types for the password service
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Password Error Enum ==
/// Unified error type for the password service.
#[derive(Error, Debug)]
pub enum PasswordError {
    /// Out-of-range length/complexity or malformed request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Record not found (transport level only, the service returns `Option`)
    #[error("Password not found: {0}")]
    NotFound(String),

    /// Failure reported by the persistence collaborator, passed through as-is
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// One-way hashing failed
    #[error("Hashing failed: {0}")]
    Hashing(String),
}

// == Extractor Rejections ==
impl From<QueryRejection> for PasswordError {
    fn from(rejection: QueryRejection) -> Self {
        PasswordError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for PasswordError {
    fn from(rejection: JsonRejection) -> Self {
        PasswordError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for PasswordError {
    fn into_response(self) -> Response {
        let status = match &self {
            PasswordError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PasswordError::NotFound(_) => StatusCode::NOT_FOUND,
            PasswordError::Storage(StoreError::Missing(_)) => StatusCode::NOT_FOUND,
            PasswordError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PasswordError::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal details stay in the log, not in the response body
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the password service.
pub type Result<T> = std::result::Result<T, PasswordError>;
