
use crate::BackupService;

use confapi_core::{
    ArchiveResult, BackupJob, ContentService, CoreError, EventPublisher, ExecutionEngine,
    ExportJob, ImportJob, PlatformEvent, Principal, ProgressListener, Result as CoreErrorResult,
    SearchIndex, Space, TaskManager, TrackedTask, TrackingId, UrlResolver,
};

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use http::Uri;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub(crate) const BASE_URL: &str = "http://localhost:1990/confluence";
pub(crate) const SPACE_KEY: &str = "space";
pub(crate) const EXPORT_PATH: &str = "download/space-export.zip";
pub(crate) const EXPORT_URL: &str = "http://localhost:1990/confluence/download/space-export.zip";

pub(crate) fn actor() -> Principal {
    Principal::new("admin")
}

// =========================================================================
// Collaborator fakes
// =========================================================================

#[derive(Default)]
pub(crate) struct FakeContentService {
    spaces: Mutex<HashMap<String, Space>>,
}

impl FakeContentService {
    pub(crate) fn add_space(&self, key: &str) {
        self.spaces
            .lock()
            .unwrap()
            .insert(key.to_string(), Space::new(key, format!("{} space", key)));
    }
}

impl ContentService for FakeContentService {
    fn find_space_by_key(&self, key: &str) -> Option<Space> {
        self.spaces.lock().unwrap().get(key).cloned()
    }
}

#[derive(Default)]
pub(crate) struct FakeEngine {
    pub(crate) fail: AtomicBool,
    pub(crate) exports: Mutex<Vec<ExportJob>>,
    pub(crate) imports: Mutex<Vec<ImportJob>>,
}

impl ExecutionEngine for FakeEngine {
    fn run_export(
        &self,
        job: &ExportJob,
        _progress: &dyn ProgressListener,
    ) -> CoreErrorResult<ArchiveResult> {
        self.exports.lock().unwrap().push(job.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::engine("disk full"));
        }
        Ok(ArchiveResult::new(EXPORT_PATH))
    }

    fn run_import(&self, job: &ImportJob, _progress: &dyn ProgressListener) -> CoreErrorResult<()> {
        self.imports.lock().unwrap().push(job.clone());
        if self.fail.load(Ordering::SeqCst) {
            return Err(CoreError::engine("corrupt entities"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeTaskManager {
    tasks: Mutex<HashMap<TrackingId, (Principal, TrackedTask)>>,
    pub(crate) submitted: Mutex<Vec<(Principal, BackupJob)>>,
}

impl FakeTaskManager {
    pub(crate) fn put(&self, owner: &Principal, id: TrackingId, task: TrackedTask) {
        self.tasks
            .lock()
            .unwrap()
            .insert(id, (owner.clone(), task));
    }
}

impl TaskManager for FakeTaskManager {
    fn submit(&self, actor: &Principal, job: BackupJob) -> CoreErrorResult<TrackingId> {
        self.submitted.lock().unwrap().push((actor.clone(), job));
        Ok(TrackingId::new())
    }

    fn lookup(&self, actor: &Principal, id: TrackingId) -> Option<TrackedTask> {
        self.tasks
            .lock()
            .unwrap()
            .get(&id)
            .filter(|(owner, _)| owner == actor)
            .map(|(_, task)| task.clone())
    }
}

pub(crate) struct FakeUrlResolver;

impl UrlResolver for FakeUrlResolver {
    fn to_public_uri(&self, relative_path: &str) -> CoreErrorResult<Uri> {
        let uri = format!("{}/{}", BASE_URL, relative_path);
        uri.parse().map_err(|_| CoreError::invalid_uri(uri))
    }

    fn to_api_uri(&self, segments: &[&str]) -> CoreErrorResult<Uri> {
        let uri = format!("{}/rest/confapi/1/{}", BASE_URL, segments.join("/"));
        uri.parse().map_err(|_| CoreError::invalid_uri(uri))
    }
}

#[derive(Default)]
pub(crate) struct RecordingSearchIndex {
    pub(crate) reindexed: AtomicUsize,
}

impl SearchIndex for RecordingSearchIndex {
    fn reindex(&self) {
        self.reindexed.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub(crate) struct RecordingEvents {
    pub(crate) published: Mutex<Vec<PlatformEvent>>,
}

impl EventPublisher for RecordingEvents {
    fn publish(&self, event: PlatformEvent) {
        self.published.lock().unwrap().push(event);
    }
}

pub(crate) struct Fixture {
    pub(crate) service: BackupService,
    pub(crate) content: Arc<FakeContentService>,
    pub(crate) engine: Arc<FakeEngine>,
    pub(crate) tasks: Arc<FakeTaskManager>,
    pub(crate) search: Arc<RecordingSearchIndex>,
    pub(crate) events: Arc<RecordingEvents>,
}

pub(crate) fn fixture() -> Fixture {
    let content = Arc::new(FakeContentService::default());
    let engine = Arc::new(FakeEngine::default());
    let tasks = Arc::new(FakeTaskManager::default());
    let search = Arc::new(RecordingSearchIndex::default());
    let events = Arc::new(RecordingEvents::default());

    let service = BackupService::new(
        content.clone(),
        engine.clone(),
        tasks.clone(),
        Arc::new(FakeUrlResolver),
        search.clone(),
        events.clone(),
    );

    Fixture {
        service,
        content,
        engine,
        tasks,
        search,
        events,
    }
}

// =========================================================================
// Archive helpers
// =========================================================================

pub(crate) fn write_archive(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut zip = ZipWriter::new(File::create(&path).unwrap());
    for (entry, content) in entries {
        zip.start_file(*entry, SimpleFileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
    path
}

pub(crate) fn space_descriptor(key: &str) -> String {
    format!("#Created by export\nexportType=space\nspaceKey={}\nspaceName=Imported\n", key)
}

pub(crate) fn space_archive(dir: &Path, key: &str) -> PathBuf {
    write_archive(
        dir,
        "space.zip",
        &[
            ("entities.xml", "<hibernate-generic/>"),
            ("exportDescriptor.properties", &space_descriptor(key)),
        ],
    )
}
