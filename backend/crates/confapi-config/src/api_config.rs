use crate::{ConfigError, ConfigErrorResult, DEFAULT_API_USER};

use serde::Deserialize;

/// Configuration for the REST API layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Acting user when a request carries no X-Username header
    pub default_user: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_user: DEFAULT_API_USER.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.default_user.trim().is_empty() {
            return Err(ConfigError::api("api.default_user cannot be blank"));
        }
        Ok(())
    }
}
