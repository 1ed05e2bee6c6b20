use crate::{
    ApiConfig, BackupConfig, CONFIG_DIR_ENV, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub api: ApiConfig,
    pub backup: BackupConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for CONFAPI_CONFIG_DIR env var, else use ./.confapi/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply CONFAPI_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: CONFAPI_CONFIG_DIR env var > ./.confapi/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.api.validate()?;
        self.backup.validate()?;
        Ok(())
    }

    /// Absolute directory exported archives are written to
    pub fn export_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.backup.export_dir))
    }

    /// Absolute directory uploaded archives are stored in
    pub fn upload_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.backup.upload_dir))
    }

    /// Absolute log file path, `None` when logging to the console
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match &self.logging.file {
            Some(file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("-")
        );
        info!("  api: default user '{}'", self.api.default_user);
        info!(
            "  backup: base_url={}, exports={}, uploads={}, max_upload={}MB",
            self.backup.base_url,
            self.backup.export_dir,
            self.backup.upload_dir,
            self.backup.max_upload_mb
        );
        info!(
            "  tasks: retention={}s, reap every {}s",
            self.backup.task_retention_secs, self.backup.reap_interval_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("CONFAPI_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("CONFAPI_SERVER_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("CONFAPI_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("CONFAPI_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("CONFAPI_LOG_FILE", &mut self.logging.file);

        // API
        Self::apply_env_string("CONFAPI_API_DEFAULT_USER", &mut self.api.default_user);

        // Backup
        Self::apply_env_string("CONFAPI_BACKUP_BASE_URL", &mut self.backup.base_url);
        Self::apply_env_string("CONFAPI_BACKUP_EXPORT_DIR", &mut self.backup.export_dir);
        Self::apply_env_string("CONFAPI_BACKUP_UPLOAD_DIR", &mut self.backup.upload_dir);
        Self::apply_env_parse(
            "CONFAPI_BACKUP_MAX_UPLOAD_MB",
            &mut self.backup.max_upload_mb,
        );
        Self::apply_env_parse(
            "CONFAPI_BACKUP_TASK_RETENTION_SECS",
            &mut self.backup.task_retention_secs,
        );
        Self::apply_env_parse(
            "CONFAPI_BACKUP_REAP_INTERVAL_SECS",
            &mut self.backup.reap_interval_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
