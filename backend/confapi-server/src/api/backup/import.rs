//! Space import handler

use crate::api::run_blocking;
use crate::{
    ActingUser, ApiResult, AppState, BackupQuery, IMPORT_STATUS_IMPORTED, ImportResponse,
    TaskAcceptedResponse,
};

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// PUT /rest/confapi/1/backup/import
///
/// The body is the raw archive. It is staged in the upload dir because the
/// import works on a file; a sync import removes it afterwards, an async one
/// leaves it for the task and the retention sweep.
pub async fn import_space(
    State(state): State<AppState>,
    ActingUser(actor): ActingUser,
    Query(query): Query<BackupQuery>,
    body: Bytes,
) -> ApiResult<Response> {
    let file = state.uploads.store(&body).await?;
    let backup = state.backup.clone();
    let path = file.clone();

    if query.run_async {
        let tracking_id = match run_blocking(move || backup.import_async(&actor, &path)).await {
            Ok(tracking_id) => tracking_id,
            Err(e) => {
                state.uploads.discard(&file);
                return Err(e);
            }
        };
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

    let result = run_blocking(move || backup.import_sync(&actor, &path)).await;
    state.uploads.discard(&file);
    result?;

    Ok((
        StatusCode::OK,
        Json(ImportResponse {
            status: IMPORT_STATUS_IMPORTED.to_string(),
        }),
    )
        .into_response())
}
