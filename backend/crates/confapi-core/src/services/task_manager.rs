use crate::{BackupJob, Principal, Result as CoreErrorResult, TrackedTask, TrackingId};

/// Runs jobs on its own workers and keeps their state until retention expires
pub trait TaskManager: Send + Sync {
    /// Start `job` and return immediately
    fn submit(&self, actor: &Principal, job: BackupJob) -> CoreErrorResult<TrackingId>;

    /// Live view of a task submitted by `actor`, `None` if unknown or reaped
    fn lookup(&self, actor: &Principal, id: TrackingId) -> Option<TrackedTask>;
}
