//! Backup errors
//!
//! The taxonomy mirrors how callers must react: `BadRequest` for invalid
//! input or violated preconditions, `NotFound` for a missing space, and
//! `Internal` for I/O failures and tasks that finished unsuccessfully.

use confapi_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl BackupError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        BackupError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        BackupError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        BackupError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the location suffix, safe to show to API clients
    pub fn message(&self) -> &str {
        match self {
            BackupError::BadRequest { message, .. }
            | BackupError::NotFound { message, .. }
            | BackupError::Internal { message, .. } => message,
        }
    }
}

impl From<CoreError> for BackupError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, .. } => BackupError::BadRequest { message, location },
            CoreError::InvalidArchiveFormat { value, .. } => BackupError::BadRequest {
                message: format!("Invalid archive format: {}", value),
                location,
            },
            CoreError::InvalidTrackingId { value, .. } => BackupError::BadRequest {
                message: format!("Invalid tracking id: {}", value),
                location,
            },
            other => {
                log::error!("Backup collaborator failed: {}", other);
                BackupError::Internal {
                    message: other.to_string(),
                    location,
                }
            }
        }
    }
}

pub type BackupErrorResult<T> = StdResult<T, BackupError>;
