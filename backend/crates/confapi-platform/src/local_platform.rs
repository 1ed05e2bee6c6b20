use crate::{
    BaseUrlResolver, BroadcastEventBus, InMemoryContentService, LocalExecutionEngine,
    LocalSearchIndex, LocalTaskManager,
};

use confapi_backup::BackupService;
use confapi_core::Result as CoreErrorResult;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

/// The in-process collaborators, kept together so callers can reach them
/// after the backup service has been built
#[derive(Clone)]
pub struct LocalPlatform {
    pub content: Arc<InMemoryContentService>,
    pub engine: Arc<LocalExecutionEngine>,
    pub task_manager: Arc<LocalTaskManager>,
    pub search_index: Arc<LocalSearchIndex>,
    pub events: Arc<BroadcastEventBus>,
}

impl LocalPlatform {
    pub fn new(runtime: Handle, export_dir: impl Into<PathBuf>, retention: Duration) -> Self {
        let content = Arc::new(InMemoryContentService::new());
        let engine = Arc::new(LocalExecutionEngine::new(content.clone(), export_dir));
        let task_manager = Arc::new(LocalTaskManager::new(runtime, engine.clone(), retention));

        Self {
            content,
            engine,
            task_manager,
            search_index: Arc::new(LocalSearchIndex::new()),
            events: Arc::new(BroadcastEventBus::default()),
        }
    }

    /// Backup service wired to these collaborators
    pub fn backup_service(&self, base_url: &str) -> CoreErrorResult<BackupService> {
        let url_resolver = BaseUrlResolver::new(base_url)?;

        Ok(BackupService::new(
            self.content.clone(),
            self.engine.clone(),
            self.task_manager.clone(),
            Arc::new(url_resolver),
            self.search_index.clone(),
            self.events.clone(),
        ))
    }
}
