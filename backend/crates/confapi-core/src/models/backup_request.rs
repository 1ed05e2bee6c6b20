use crate::ArchiveFormat;

use serde::{Deserialize, Serialize};

/// Caller-supplied description of a space backup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupRequest {
    /// Key of the space to export (required, must not be blank)
    pub space_key: Option<String>,
    pub archive_format: ArchiveFormat,
    pub include_attachments: bool,
    pub include_comments: bool,
}

impl BackupRequest {
    pub fn new(space_key: impl Into<String>) -> Self {
        Self {
            space_key: Some(space_key.into()),
            ..Self::default()
        }
    }
}

impl Default for BackupRequest {
    fn default() -> Self {
        Self {
            space_key: None,
            archive_format: ArchiveFormat::default(),
            include_attachments: true,
            include_comments: true,
        }
    }
}
