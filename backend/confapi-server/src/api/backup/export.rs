//! Space export handler

use crate::api::run_blocking;
use crate::{ActingUser, ApiResult, AppState, BackupQuery, ExportResponse, TaskAcceptedResponse};

use confapi_core::BackupRequest;

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// POST /rest/confapi/1/backup/export
///
/// Synchronous exports answer 201 with the download location. With
/// `?async=true` the reply is 202 and points at the queue status instead.
pub async fn export_space(
    State(state): State<AppState>,
    ActingUser(actor): ActingUser,
    Query(query): Query<BackupQuery>,
    Json(request): Json<BackupRequest>,
) -> ApiResult<Response> {
    let backup = state.backup.clone();

    if query.run_async {
        let tracking_id = run_blocking(move || backup.export_async(&actor, &request)).await?;
        let queue_url = state.backup.queue_uri(tracking_id)?.to_string();

        return Ok((
            StatusCode::ACCEPTED,
            [(header::LOCATION, queue_url.clone())],
            Json(TaskAcceptedResponse {
                tracking_id,
                queue_url,
            }),
        )
            .into_response());
    }

    let download_url = run_blocking(move || backup.export_sync(&actor, &request))
        .await?
        .to_string();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, download_url.clone())],
        Json(ExportResponse { download_url }),
    )
        .into_response())
}
