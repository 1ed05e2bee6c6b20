use confapi_core::{CoreError, Result as CoreErrorResult, UrlResolver};

use http::Uri;

/// Mount point of the REST API below the base URL
pub const REST_PATH: &str = "/rest/confapi/1";

/// Resolves paths against the configured public base URL
#[derive(Debug, Clone)]
pub struct BaseUrlResolver {
    base: String,
}

impl BaseUrlResolver {
    pub fn new(base_url: &str) -> CoreErrorResult<Self> {
        let base = base_url.trim_end_matches('/').to_string();
        let uri: Uri = base
            .parse()
            .map_err(|_| CoreError::invalid_uri(base_url))?;
        if uri.scheme().is_none() || uri.authority().is_none() {
            return Err(CoreError::invalid_uri(base_url));
        }
        Ok(Self { base })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn parse(value: String) -> CoreErrorResult<Uri> {
        value.parse().map_err(|_| CoreError::invalid_uri(value))
    }
}

impl UrlResolver for BaseUrlResolver {
    fn to_public_uri(&self, relative_path: &str) -> CoreErrorResult<Uri> {
        Self::parse(format!(
            "{}/{}",
            self.base,
            relative_path.trim_start_matches('/')
        ))
    }

    fn to_api_uri(&self, segments: &[&str]) -> CoreErrorResult<Uri> {
        let path = segments
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .collect::<Vec<_>>()
            .join("/");
        Self::parse(format!("{}{}/{}", self.base, REST_PATH, path))
    }
}
