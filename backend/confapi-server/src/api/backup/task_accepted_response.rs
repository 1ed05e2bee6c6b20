use confapi_core::TrackingId;

use serde::Serialize;

/// Reply to an asynchronous export or import
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAcceptedResponse {
    pub tracking_id: TrackingId,
    /// Where to poll for the task's status
    pub queue_url: String,
}
