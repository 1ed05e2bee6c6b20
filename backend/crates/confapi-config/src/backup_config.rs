use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_EXPORT_DIR, DEFAULT_MAX_UPLOAD_MB,
    DEFAULT_REAP_INTERVAL_SECS, DEFAULT_TASK_RETENTION_SECS, DEFAULT_UPLOAD_DIR,
    MAX_MAX_UPLOAD_MB, MIN_MAX_UPLOAD_MB, MIN_REAP_INTERVAL_SECS, MIN_TASK_RETENTION_SECS,
};

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

/// Export/import settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Public base URL that download and queue links are built on
    pub base_url: String,
    /// Where exported archives are written, relative to the config dir
    pub export_dir: String,
    /// Where uploaded import archives are stored, relative to the config dir
    pub upload_dir: String,
    pub max_upload_mb: u64,
    /// How long finished tasks stay pollable
    pub task_retention_secs: u64,
    pub reap_interval_secs: u64,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            export_dir: String::from(DEFAULT_EXPORT_DIR),
            upload_dir: String::from(DEFAULT_UPLOAD_DIR),
            max_upload_mb: DEFAULT_MAX_UPLOAD_MB,
            task_retention_secs: DEFAULT_TASK_RETENTION_SECS,
            reap_interval_secs: DEFAULT_REAP_INTERVAL_SECS,
        }
    }
}

impl BackupConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::backup(format!(
                "backup.base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        validate_relative_dir("backup.export_dir", &self.export_dir)?;
        validate_relative_dir("backup.upload_dir", &self.upload_dir)?;

        if !(MIN_MAX_UPLOAD_MB..=MAX_MAX_UPLOAD_MB).contains(&self.max_upload_mb) {
            return Err(ConfigError::backup(format!(
                "backup.max_upload_mb must be {}-{}, got {}",
                MIN_MAX_UPLOAD_MB, MAX_MAX_UPLOAD_MB, self.max_upload_mb
            )));
        }

        if self.task_retention_secs < MIN_TASK_RETENTION_SECS {
            return Err(ConfigError::backup(format!(
                "backup.task_retention_secs must be >= {}, got {}",
                MIN_TASK_RETENTION_SECS, self.task_retention_secs
            )));
        }

        if self.reap_interval_secs < MIN_REAP_INTERVAL_SECS {
            return Err(ConfigError::backup(format!(
                "backup.reap_interval_secs must be >= {}, got {}",
                MIN_REAP_INTERVAL_SECS, self.reap_interval_secs
            )));
        }

        Ok(())
    }

    pub fn max_upload_bytes(&self) -> usize {
        usize::try_from(self.max_upload_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
    }

    pub fn task_retention(&self) -> Duration {
        Duration::from_secs(self.task_retention_secs)
    }

    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval_secs)
    }
}

fn validate_relative_dir(name: &str, dir: &str) -> ConfigErrorResult<()> {
    if dir.trim().is_empty() || Path::new(dir).is_absolute() || dir.contains("..") {
        return Err(ConfigError::backup(format!(
            "{} must be relative and cannot contain '..', got '{}'",
            name, dir
        )));
    }
    Ok(())
}
