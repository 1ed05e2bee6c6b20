//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use confapi_backup::BackupError;
use confapi_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "BAD_REQUEST")
    pub code: String,
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound { message, location } => {
                log::debug!("404: {} {}", message, location);
                (StatusCode::NOT_FOUND, "NOT_FOUND", message)
            }
            ApiError::BadRequest { message, location } => {
                log::debug!("400: {} {}", message, location);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
            }
            ApiError::Internal { message, location } => {
                log::error!("500: {} {}", message, location);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
            }
        };

        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody {
                    code: code.into(),
                    message,
                },
            }),
        )
            .into_response()
    }
}

impl From<BackupError> for ApiError {
    #[track_caller]
    fn from(e: BackupError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            BackupError::BadRequest { message, .. } => ApiError::BadRequest { message, location },
            BackupError::NotFound { message, .. } => ApiError::NotFound { message, location },
            BackupError::Internal { message, .. } => ApiError::Internal { message, location },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::from(BackupError::from(e))
    }
}

/// A blocking backup call panicked or was cancelled
impl From<JoinError> for ApiError {
    #[track_caller]
    fn from(e: JoinError) -> Self {
        log::error!("Blocking backup call did not complete: {}", e);
        ApiError::Internal {
            message: "Backup operation was interrupted".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
