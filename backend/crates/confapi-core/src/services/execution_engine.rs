use crate::{ArchiveResult, ExportJob, ImportJob, ProgressListener, Result as CoreErrorResult};

/// Performs the actual export/import I/O.
///
/// Both calls block until the work is finished; they may run inline on a
/// request thread or on a task manager worker.
pub trait ExecutionEngine: Send + Sync {
    fn run_export(
        &self,
        job: &ExportJob,
        progress: &dyn ProgressListener,
    ) -> CoreErrorResult<ArchiveResult>;

    fn run_import(&self, job: &ImportJob, progress: &dyn ProgressListener) -> CoreErrorResult<()>;
}
