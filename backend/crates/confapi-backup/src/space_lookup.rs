use crate::{BackupError, BackupErrorResult};

use confapi_core::{ContentService, Space};

/// Resolve a caller-supplied space key.
///
/// Missing or blank keys are a bad request, unknown keys are not found.
pub fn resolve_space(content: &dyn ContentService, key: Option<&str>) -> BackupErrorResult<Space> {
    let key = match key.map(str::trim) {
        Some(key) if !key.is_empty() => key,
        _ => return Err(BackupError::bad_request("Space key is required")),
    };

    content
        .find_space_by_key(key)
        .ok_or_else(|| BackupError::not_found(format!("Space with key '{}' not found", key)))
}

pub fn find_space(content: &dyn ContentService, key: &str) -> Option<Space> {
    content.find_space_by_key(key.trim())
}
