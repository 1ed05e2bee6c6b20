use crate::Result as CoreErrorResult;

use http::Uri;

/// Turns relative paths into absolute URIs of this service
pub trait UrlResolver: Send + Sync {
    /// `<base>/<relative_path>`
    fn to_public_uri(&self, relative_path: &str) -> CoreErrorResult<Uri>;

    /// `<base>/<rest prefix>/<segments...>`
    fn to_api_uri(&self, segments: &[&str]) -> CoreErrorResult<Uri>;
}
