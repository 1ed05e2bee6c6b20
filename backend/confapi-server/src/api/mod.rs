pub mod backup;
pub mod error;
pub mod extractors;
pub mod ping;

use crate::ApiResult;

use confapi_backup::BackupErrorResult;

/// Run a backup service call on the blocking pool
///
/// Sync exports and imports do file I/O for as long as the archive takes,
/// which must not stall the async workers.
pub(crate) async fn run_blocking<T, F>(work: F) -> ApiResult<T>
where
    F: FnOnce() -> BackupErrorResult<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(work).await?;
    Ok(result?)
}
