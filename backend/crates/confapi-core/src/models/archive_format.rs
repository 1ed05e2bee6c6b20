use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Archive type produced by a space export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ArchiveFormat {
    /// Full backup archive, importable again
    #[default]
    Zip,
    /// Rendered HTML archive for offline reading
    Html,
}

impl ArchiveFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Html => "html",
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "zip" | "xml" => Ok(Self::Zip),
            "html" => Ok(Self::Html),
            _ => Err(CoreError::InvalidArchiveFormat {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Request bodies go through the lenient parser, so `ZIP` and `xml` are accepted
impl TryFrom<String> for ArchiveFormat {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: String) -> CoreErrorResult<Self> {
        Self::from_str(&value)
    }
}

impl std::fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
