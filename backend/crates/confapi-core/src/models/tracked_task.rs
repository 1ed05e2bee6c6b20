/// Generic progress fields every long-running task exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskProgress {
    pub complete: bool,
    pub successful: bool,
    pub percent_complete: u8,
    pub elapsed_millis: u64,
}

/// Live view of a task held by the task manager.
///
/// The task manager runs unrelated kinds of work; only `Export` and `Import`
/// belong to the backup subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackedTask {
    Export {
        progress: TaskProgress,
        /// Relative archive path, set once the export has produced it
        download_path: Option<String>,
    },
    Import {
        progress: TaskProgress,
    },
    Other {
        name: String,
        progress: TaskProgress,
    },
}

impl TrackedTask {
    pub fn progress(&self) -> &TaskProgress {
        match self {
            Self::Export { progress, .. }
            | Self::Import { progress }
            | Self::Other { progress, .. } => progress,
        }
    }
}
