use serde::Serialize;

pub const IMPORT_STATUS_IMPORTED: &str = "imported";

/// Result of a synchronous import
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub status: String,
}
