use crate::ShutdownListener;
use crate::uploads::UploadStore;

use confapi_platform::LocalTaskManager;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info};
use tokio::time::MissedTickBehavior;

/// Periodically drop finished tasks and stale uploads until shutdown
pub async fn run_retention_loop(
    task_manager: Arc<LocalTaskManager>,
    uploads: UploadStore,
    interval: Duration,
    retention: Duration,
    shutdown: ShutdownListener,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        "Retention loop started: every {}s, retention {}s",
        interval.as_secs(),
        retention.as_secs()
    );

    let stopped = shutdown.triggered();
    tokio::pin!(stopped);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let reaped = task_manager.reap_expired();
                let swept = uploads.sweep(retention, &task_manager.pending_files());
                debug!("Retention pass: {} tasks reaped, {} uploads swept", reaped, swept);
            }
            _ = &mut stopped => {
                info!("Retention loop stopped");
                break;
            }
        }
    }
}
