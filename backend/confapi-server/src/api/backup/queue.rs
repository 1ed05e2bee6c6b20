use crate::api::run_blocking;
use crate::{ActingUser, ApiError, ApiResult, AppState};

use confapi_core::{QueueStatus, TrackingId};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// GET /rest/confapi/1/backup/queue/{tracking_id}
///
/// Only the user who submitted a task can see it; anyone else gets 404.
pub async fn get_queue_status(
    State(state): State<AppState>,
    ActingUser(actor): ActingUser,
    Path(id): Path<String>,
) -> ApiResult<Json<QueueStatus>> {
    let tracking_id = TrackingId::parse(&id)?;
    let backup = state.backup.clone();

    let status = run_blocking(move || backup.get_queue_status(&actor, tracking_id))
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("No task with tracking id {}", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(status))
}
