use crate::descriptor::{ArchiveDescriptorProperties, PROPERTY_EXPORT_TYPE_SPACE, read_descriptor};
use crate::space_lookup::find_space;
use crate::{BackupError, BackupErrorResult};

use confapi_core::{ContentService, ImportJob, Principal};

use std::path::{self, Path};

/// Check that `file` is a space export whose space does not exist yet
pub fn validate_import_file(content: &dyn ContentService, file: &Path) -> BackupErrorResult<()> {
    let descriptor = read_descriptor(file)?;
    validate_descriptor(content, &descriptor)
}

pub fn validate_descriptor(
    content: &dyn ContentService,
    descriptor: &ArchiveDescriptorProperties,
) -> BackupErrorResult<()> {
    match descriptor.export_type.as_deref().map(str::trim) {
        Some(PROPERTY_EXPORT_TYPE_SPACE) => {}
        Some(other) => {
            return Err(BackupError::bad_request(format!(
                "Archive is not a space export (export type '{}')",
                other
            )));
        }
        None => {
            return Err(BackupError::bad_request(
                "Archive is not a space export (export type missing)",
            ));
        }
    }

    let space_key = descriptor
        .space_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .ok_or_else(|| BackupError::bad_request("Archive descriptor does not name a space key"))?;

    // Import creates the space, so it must not exist yet
    if find_space(content, space_key).is_some() {
        return Err(BackupError::bad_request(format!(
            "Space with key '{}' already exists",
            space_key
        )));
    }

    Ok(())
}

/// Wrap `file` into import work. No validation happens here.
pub fn build_import_job(file: &Path, actor: &Principal) -> ImportJob {
    ImportJob {
        working_file: path::absolute(file).unwrap_or_else(|_| file.to_path_buf()),
        actor: actor.clone(),
    }
}
