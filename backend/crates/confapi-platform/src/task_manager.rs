//! In-process task manager.
//!
//! Jobs run on the tokio blocking pool. Each task keeps its state until it
//! has been finished for longer than the retention window and
//! [`LocalTaskManager::reap_expired`] removes it. A worker that panics
//! finishes its task as failed.

use confapi_backup::BackupMetrics;
use confapi_core::{
    BackupJob, BackupKind, CoreError, ExecutionEngine, Principal, ProgressListener,
    Result as CoreErrorResult, TaskManager, TaskProgress, TrackedTask, TrackingId,
};

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use log::{debug, error, info};
use tokio::runtime::Handle;

type TaskMap = Arc<Mutex<HashMap<TrackingId, TaskEntry>>>;

pub struct LocalTaskManager {
    runtime: Handle,
    engine: Arc<dyn ExecutionEngine>,
    tasks: TaskMap,
    retention: Duration,
    metrics: BackupMetrics,
}

#[derive(Debug, Clone)]
enum TaskKind {
    Export,
    Import,
    Other(String),
}

impl TaskKind {
    fn backup_kind(&self) -> Option<BackupKind> {
        match self {
            TaskKind::Export => Some(BackupKind::Export),
            TaskKind::Import => Some(BackupKind::Import),
            TaskKind::Other(_) => None,
        }
    }
}

#[derive(Debug)]
struct TaskEntry {
    owner: Principal,
    kind: TaskKind,
    started: Instant,
    finished: Option<Instant>,
    successful: bool,
    percent_complete: u8,
    download_path: Option<String>,
    /// Archive an import reads; must stay on disk until the task finishes
    working_file: Option<PathBuf>,
}

impl TaskEntry {
    fn snapshot(&self) -> TrackedTask {
        let elapsed = self.finished.unwrap_or_else(Instant::now) - self.started;
        let progress = TaskProgress {
            complete: self.finished.is_some(),
            successful: self.successful,
            percent_complete: self.percent_complete,
            elapsed_millis: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        };
        match &self.kind {
            TaskKind::Export => TrackedTask::Export {
                progress,
                download_path: self.download_path.clone(),
            },
            TaskKind::Import => TrackedTask::Import { progress },
            TaskKind::Other(name) => TrackedTask::Other {
                name: name.clone(),
                progress,
            },
        }
    }
}

/// Progress sink handed to the engine for one task
struct TaskProgressReporter {
    id: TrackingId,
    tasks: TaskMap,
}

impl ProgressListener for TaskProgressReporter {
    fn update(&self, percent: u8, message: &str) {
        debug!("Task {}: {}% {}", self.id, percent.min(100), message);
        if let Some(entry) = lock(&self.tasks).get_mut(&self.id) {
            entry.percent_complete = percent.min(100);
        }
    }
}

fn lock(
    tasks: &Mutex<HashMap<TrackingId, TaskEntry>>,
) -> MutexGuard<'_, HashMap<TrackingId, TaskEntry>> {
    tasks.lock().unwrap_or_else(PoisonError::into_inner)
}

fn finish(
    tasks: &Mutex<HashMap<TrackingId, TaskEntry>>,
    metrics: &BackupMetrics,
    id: TrackingId,
    outcome: CoreErrorResult<Option<String>>,
) {
    let mut tasks = lock(tasks);
    let Some(entry) = tasks.get_mut(&id) else {
        return;
    };
    entry.finished = Some(Instant::now());
    match outcome {
        Ok(download_path) => {
            entry.successful = true;
            entry.percent_complete = 100;
            entry.download_path = download_path;
            info!("Task {} finished", id);
        }
        Err(e) => {
            entry.successful = false;
            error!("Task {} failed: {}", id, e);
            if let Some(kind) = entry.kind.backup_kind() {
                metrics.task_failed(kind);
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl LocalTaskManager {
    pub fn new(runtime: Handle, engine: Arc<dyn ExecutionEngine>, retention: Duration) -> Self {
        Self {
            runtime,
            engine,
            tasks: Arc::new(Mutex::new(HashMap::new())),
            retention,
            metrics: BackupMetrics::new(),
        }
    }

    fn register(
        &self,
        owner: &Principal,
        kind: TaskKind,
        working_file: Option<PathBuf>,
    ) -> TrackingId {
        let id = TrackingId::new();
        lock(&self.tasks).insert(
            id,
            TaskEntry {
                owner: owner.clone(),
                kind,
                started: Instant::now(),
                finished: None,
                successful: false,
                percent_complete: 0,
                download_path: None,
                working_file,
            },
        );
        id
    }

    /// Run `work` on the blocking pool and record how it ended
    fn spawn_tracked<W>(&self, id: TrackingId, work: W)
    where
        W: FnOnce(&dyn ProgressListener) -> CoreErrorResult<Option<String>> + Send + 'static,
    {
        let tasks = self.tasks.clone();
        let metrics = self.metrics.clone();
        self.runtime.spawn_blocking(move || {
            let reporter = TaskProgressReporter {
                id,
                tasks: tasks.clone(),
            };
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| work(&reporter)))
                .unwrap_or_else(|payload| {
                    Err(CoreError::task_manager(format!(
                        "Worker panicked: {}",
                        panic_message(payload.as_ref())
                    )))
                });
            finish(&tasks, &metrics, id, outcome);
        });
    }

    /// Run non-backup work under this manager; it is tracked like any other task
    pub fn start_task<F>(&self, owner: &Principal, name: &str, work: F) -> TrackingId
    where
        F: FnOnce(&dyn ProgressListener) -> CoreErrorResult<()> + Send + 'static,
    {
        let id = self.register(owner, TaskKind::Other(name.to_string()), None);
        self.spawn_tracked(id, move |reporter| work(reporter).map(|()| None));
        id
    }

    /// Drop tasks that finished longer ago than the retention window
    pub fn reap_expired(&self) -> usize {
        let mut tasks = lock(&self.tasks);
        let before = tasks.len();
        tasks.retain(|_, entry| match entry.finished {
            Some(finished) => finished.elapsed() < self.retention,
            None => true,
        });
        let reaped = before - tasks.len();
        if reaped > 0 {
            info!("Reaped {} expired tasks", reaped);
        }
        reaped
    }

    pub fn task_count(&self) -> usize {
        lock(&self.tasks).len()
    }

    /// Import archives still needed by tasks that have not finished
    pub fn pending_files(&self) -> HashSet<PathBuf> {
        lock(&self.tasks)
            .values()
            .filter(|entry| entry.finished.is_none())
            .filter_map(|entry| entry.working_file.clone())
            .collect()
    }
}

impl TaskManager for LocalTaskManager {
    fn submit(&self, actor: &Principal, job: BackupJob) -> CoreErrorResult<TrackingId> {
        let (kind, working_file) = match &job {
            BackupJob::Export(_) => (TaskKind::Export, None),
            BackupJob::Import(import) => (TaskKind::Import, Some(import.working_file.clone())),
        };
        let id = self.register(actor, kind, working_file);
        debug!("Queued {} as task {}", job.name(), id);

        let engine = self.engine.clone();
        self.spawn_tracked(id, move |reporter| match job {
            BackupJob::Export(job) => engine
                .run_export(&job, reporter)
                .map(|archive| Some(archive.relative_path)),
            BackupJob::Import(job) => engine.run_import(&job, reporter).map(|()| None),
        });

        Ok(id)
    }

    fn lookup(&self, actor: &Principal, id: TrackingId) -> Option<TrackedTask> {
        lock(&self.tasks)
            .get(&id)
            .filter(|entry| &entry.owner == actor)
            .map(TaskEntry::snapshot)
    }
}
