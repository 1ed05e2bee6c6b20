use serde::Deserialize;

/// Query parameters shared by export and import
#[derive(Debug, Default, Deserialize)]
pub struct BackupQuery {
    /// `?async=true` hands the job to the task manager
    #[serde(rename = "async", default)]
    pub run_async: bool,
}
