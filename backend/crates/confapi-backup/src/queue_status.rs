use crate::backup_service::BackupService;
use crate::metrics::kind_label;
use crate::{BackupError, BackupErrorResult};

use confapi_core::{
    BackupKind, PlatformEvent, Principal, QueueStatus, TaskProgress, TrackedTask, TrackingId,
};

use http::Uri;
use log::{debug, info, warn};

impl BackupService {
    /// Status of a backup task owned by `actor`.
    ///
    /// Reads the live task on every call. Each poll that sees a finished,
    /// successful import requests a cluster reindex and rebuilds the search
    /// index.
    pub fn get_queue_status(
        &self,
        actor: &Principal,
        tracking_id: TrackingId,
    ) -> BackupErrorResult<Option<QueueStatus>> {
        self.metrics.queue_polled();

        let Some(task) = self.task_manager.lookup(actor, tracking_id) else {
            debug!("No task {} for {}", tracking_id, actor);
            return Ok(None);
        };

        let status = match task {
            TrackedTask::Export {
                progress,
                download_path,
            } => {
                ensure_not_failed(BackupKind::Export, tracking_id, &progress)?;
                let result_url = if progress.complete {
                    let path = download_path.ok_or_else(|| {
                        BackupError::internal(format!(
                            "Export task {} finished without an archive",
                            tracking_id
                        ))
                    })?;
                    Some(self.url_resolver.to_public_uri(&path)?)
                } else {
                    None
                };
                build_status(tracking_id, BackupKind::Export, &progress, result_url)
            }
            TrackedTask::Import { progress } => {
                ensure_not_failed(BackupKind::Import, tracking_id, &progress)?;
                if progress.complete {
                    self.request_reindex();
                }
                build_status(tracking_id, BackupKind::Import, &progress, None)
            }
            TrackedTask::Other { name, .. } => {
                return Err(BackupError::bad_request(format!(
                    "Tracking id {} refers to '{}', not a backup task",
                    tracking_id, name
                )));
            }
        };

        Ok(Some(status))
    }

    fn request_reindex(&self) {
        info!("Import finished, requesting reindex");
        self.events.publish(PlatformEvent::ClusterReindexRequired);
        self.search_index.reindex();
        self.metrics.reindex_triggered();
    }
}

/// A failed task is reported on every poll; the failure itself is counted once,
/// where the task finishes
fn ensure_not_failed(
    kind: BackupKind,
    tracking_id: TrackingId,
    progress: &TaskProgress,
) -> BackupErrorResult<()> {
    if progress.complete && !progress.successful {
        warn!("Polled failed {} task {}", kind_label(kind), tracking_id);
        return Err(BackupError::internal(format!(
            "The {} task {} failed",
            kind_label(kind),
            tracking_id
        )));
    }
    Ok(())
}

fn build_status(
    tracking_id: TrackingId,
    kind: BackupKind,
    progress: &TaskProgress,
    result_url: Option<Uri>,
) -> QueueStatus {
    QueueStatus {
        tracking_id,
        kind,
        percent_complete: progress.percent_complete.min(100),
        elapsed_millis: progress.elapsed_millis,
        complete: progress.complete,
        successful: progress.successful,
        result_url,
    }
}
