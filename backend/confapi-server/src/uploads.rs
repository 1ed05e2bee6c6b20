//! Staging area for uploaded import archives.
//!
//! The import operation takes a file on disk, so request bodies are written
//! here first. Sync imports discard their file once done; async imports leave
//! it for the retention sweep, which skips files a running task still reads.

use crate::{ApiError, ApiResult};

use std::collections::HashSet;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use error_location::ErrorLocation;
use log::{debug, warn};
use uuid::Uuid;

const UPLOAD_PREFIX: &str = "import-";
const UPLOAD_EXTENSION: &str = "zip";

#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Write an uploaded archive to a fresh file and return its path
    pub async fn store(&self, body: &[u8]) -> ApiResult<PathBuf> {
        let location = ErrorLocation::from(Location::caller());

        if body.is_empty() {
            return Err(ApiError::BadRequest {
                message: "Import archive is empty".to_string(),
                location,
            });
        }

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| upload_failed(&self.dir, e, location))?;

        let path = self.dir.join(format!(
            "{}{}.{}",
            UPLOAD_PREFIX,
            Uuid::new_v4(),
            UPLOAD_EXTENSION
        ));
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| upload_failed(&path, e, location))?;

        debug!("Stored {} byte upload at {}", body.len(), path.display());
        Ok(path)
    }

    /// Remove an upload that is no longer needed
    pub fn discard(&self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => debug!("Removed upload {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove upload {}: {}", path.display(), e),
        }
    }

    /// Delete uploads last modified more than `older_than` ago, except those in
    /// `in_use` (absolute paths of archives an unfinished import still reads)
    pub fn sweep(&self, older_than: Duration, in_use: &HashSet<PathBuf>) -> usize {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!("Cannot list upload dir {}: {}", self.dir.display(), e);
                return 0;
            }
        };

        let mut removed = 0;
        for entry in entries.flatten() {
            let path = entry.path();
            let is_upload = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(UPLOAD_PREFIX));
            if !is_upload {
                continue;
            }

            let absolute = std::path::absolute(&path).unwrap_or_else(|_| path.clone());
            if in_use.contains(&absolute) || in_use.contains(&path) {
                debug!("Keeping upload {} for a running import", path.display());
                continue;
            }

            let expired = entry
                .metadata()
                .and_then(|meta| meta.modified())
                .ok()
                .and_then(|modified| modified.elapsed().ok())
                .is_some_and(|age| age >= older_than);

            if expired {
                match std::fs::remove_file(&path) {
                    Ok(()) => removed += 1,
                    Err(e) => warn!("Failed to remove upload {}: {}", path.display(), e),
                }
            }
        }

        if removed > 0 {
            debug!("Swept {} stale uploads", removed);
        }
        removed
    }
}

fn upload_failed(path: &Path, e: std::io::Error, location: ErrorLocation) -> ApiError {
    log::error!("Failed to store upload at {}: {}", path.display(), e);
    ApiError::Internal {
        message: "Failed to store uploaded archive".to_string(),
        location,
    }
}
