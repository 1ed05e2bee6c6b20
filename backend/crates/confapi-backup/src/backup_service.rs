//! Export/import orchestration.
//!
//! Validation and job building run the same way for both modes; the only
//! difference is whether the engine runs inline or the task manager takes
//! over. The service never spawns work itself.

use crate::export_context::build_export_job;
use crate::import_context::{build_import_job, validate_import_file};
use crate::metrics::BackupMetrics;
use crate::{BACKUP, BACKUP_QUEUE, BackupError, BackupErrorResult};

use confapi_core::{
    BackupJob, BackupKind, BackupRequest, ContentService, EventPublisher, ExecutionEngine,
    ExportJob, ImportJob, NoopProgress, Principal, SearchIndex, TaskManager, TrackingId,
    UrlResolver,
};

use std::path::Path;
use std::sync::Arc;

use http::Uri;
use log::{error, info, warn};

const MODE_SYNC: &str = "sync";
const MODE_ASYNC: &str = "async";

/// Entry point of the backup subsystem, shared by all request handlers
#[derive(Clone)]
pub struct BackupService {
    pub(crate) content: Arc<dyn ContentService>,
    pub(crate) engine: Arc<dyn ExecutionEngine>,
    pub(crate) task_manager: Arc<dyn TaskManager>,
    pub(crate) url_resolver: Arc<dyn UrlResolver>,
    pub(crate) search_index: Arc<dyn SearchIndex>,
    pub(crate) events: Arc<dyn EventPublisher>,
    pub(crate) metrics: BackupMetrics,
}

impl BackupService {
    pub fn new(
        content: Arc<dyn ContentService>,
        engine: Arc<dyn ExecutionEngine>,
        task_manager: Arc<dyn TaskManager>,
        url_resolver: Arc<dyn UrlResolver>,
        search_index: Arc<dyn SearchIndex>,
        events: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            content,
            engine,
            task_manager,
            url_resolver,
            search_index,
            events,
            metrics: BackupMetrics::new(),
        }
    }

    /// Export inline and return the download URI of the archive
    pub fn export_sync(&self, actor: &Principal, request: &BackupRequest) -> BackupErrorResult<Uri> {
        let job = self.prepare_export(actor, request)?;
        let space_key = job.space_key.clone();

        info!("Exporting space '{}' for {}", space_key, actor);
        self.metrics.export_started(MODE_SYNC);

        let archive = self.engine.run_export(&job, &NoopProgress).map_err(|e| {
            error!("Export of space '{}' failed: {}", space_key, e);
            self.metrics.task_failed(BackupKind::Export);
            BackupError::internal(format!("Export of space '{}' failed", space_key))
        })?;

        Ok(self.url_resolver.to_public_uri(&archive.relative_path)?)
    }

    /// Hand the export to the task manager and return its tracking id
    pub fn export_async(
        &self,
        actor: &Principal,
        request: &BackupRequest,
    ) -> BackupErrorResult<TrackingId> {
        let job = self.prepare_export(actor, request)?;
        let space_key = job.space_key.clone();

        let tracking_id = self.task_manager.submit(actor, BackupJob::Export(job))?;
        self.metrics.export_started(MODE_ASYNC);
        info!(
            "Submitted export of space '{}' for {} as task {}",
            space_key, actor, tracking_id
        );

        Ok(tracking_id)
    }

    /// Validate and import `file` inline
    pub fn import_sync(&self, actor: &Principal, file: &Path) -> BackupErrorResult<()> {
        let job = self.prepare_import(actor, file)?;

        info!("Importing {} for {}", job.working_file.display(), actor);
        self.metrics.import_started(MODE_SYNC);

        self.engine.run_import(&job, &NoopProgress).map_err(|e| {
            error!("Import of {} failed: {}", job.working_file.display(), e);
            self.metrics.task_failed(BackupKind::Import);
            BackupError::internal("Import failed")
        })
    }

    /// Validate `file`, then hand the import to the task manager
    pub fn import_async(&self, actor: &Principal, file: &Path) -> BackupErrorResult<TrackingId> {
        let job = self.prepare_import(actor, file)?;
        let working_file = job.working_file.clone();

        let tracking_id = self.task_manager.submit(actor, BackupJob::Import(job))?;
        self.metrics.import_started(MODE_ASYNC);
        info!(
            "Submitted import of {} for {} as task {}",
            working_file.display(),
            actor,
            tracking_id
        );

        Ok(tracking_id)
    }

    /// URI a client polls for the status of `tracking_id`
    pub fn queue_uri(&self, tracking_id: TrackingId) -> BackupErrorResult<Uri> {
        let id = tracking_id.to_string();
        Ok(self.url_resolver.to_api_uri(&[BACKUP, BACKUP_QUEUE, &id])?)
    }

    fn prepare_export(
        &self,
        actor: &Principal,
        request: &BackupRequest,
    ) -> BackupErrorResult<ExportJob> {
        build_export_job(self.content.as_ref(), request, actor).inspect_err(|e| self.rejected(e))
    }

    fn prepare_import(&self, actor: &Principal, file: &Path) -> BackupErrorResult<ImportJob> {
        validate_import_file(self.content.as_ref(), file).inspect_err(|e| self.rejected(e))?;
        Ok(build_import_job(file, actor))
    }

    fn rejected(&self, e: &BackupError) {
        if !matches!(e, BackupError::Internal { .. }) {
            warn!("Rejected backup request: {}", e.message());
            self.metrics.validation_rejected();
        }
    }
}
