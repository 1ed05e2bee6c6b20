use crate::{BackupKind, TrackingId};

use http::Uri;
use serde::{Serialize, Serializer};

/// Status of an asynchronous backup task, recomputed on every poll
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueStatus {
    pub tracking_id: TrackingId,
    pub kind: BackupKind,
    pub percent_complete: u8,
    pub elapsed_millis: u64,
    pub complete: bool,
    pub successful: bool,
    /// Download location; only present for a completed, successful export
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_uri"
    )]
    pub result_url: Option<Uri>,
}

fn serialize_uri<S>(uri: &Option<Uri>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match uri {
        Some(uri) => serializer.serialize_str(&uri.to_string()),
        None => serializer.serialize_none(),
    }
}
