use crate::uploads::UploadStore;

use confapi_backup::BackupService;
use confapi_config::ApiConfig;
use confapi_platform::LocalPlatform;

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub backup: Arc<BackupService>,
    pub platform: LocalPlatform,
    pub uploads: UploadStore,
    pub api_config: ApiConfig,
    /// `None` when no Prometheus recorder was installed (tests)
    pub metrics: Option<PrometheusHandle>,
}
