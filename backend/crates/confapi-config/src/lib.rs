mod api_config;
mod backup_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use backup_config::BackupConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "CONFAPI_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".confapi";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_API_USER: &str = "admin";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_MB: u64 = 512;
const MIN_MAX_UPLOAD_MB: u64 = 1;
const MAX_MAX_UPLOAD_MB: u64 = 4096;
const DEFAULT_TASK_RETENTION_SECS: u64 = 3600;
const MIN_TASK_RETENTION_SECS: u64 = 60;
const DEFAULT_REAP_INTERVAL_SECS: u64 = 60;
const MIN_REAP_INTERVAL_SECS: u64 = 1;
