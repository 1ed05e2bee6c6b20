use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid archive format: {value} {location}")]
    InvalidArchiveFormat {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid tracking id: {value} {location}")]
    InvalidTrackingId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid URI: {value} {location}")]
    InvalidUri {
        value: String,
        location: ErrorLocation,
    },

    #[error("Execution engine failure: {message} {location}")]
    Engine {
        message: String,
        location: ErrorLocation,
    },

    #[error("Task manager failure: {message} {location}")]
    TaskManager {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create an execution engine error
    #[track_caller]
    pub fn engine<S: Into<String>>(message: S) -> Self {
        CoreError::Engine {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a task manager error
    #[track_caller]
    pub fn task_manager<S: Into<String>>(message: S) -> Self {
        CoreError::TaskManager {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_uri<S: Into<String>>(value: S) -> Self {
        CoreError::InvalidUri {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Wrap an IO error together with the path it happened on
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CoreError::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
