mod api;

use crate::{AppState, UploadStore};

use confapi_config::ApiConfig;
use confapi_platform::LocalPlatform;

use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use tokio::runtime::Handle;

const TEST_BASE_URL: &str = "http://localhost:8000";

/// State backed by a fresh platform rooted in a temp dir; must run inside a runtime
pub(crate) fn create_test_state() -> (TempDir, AppState) {
    let dir = TempDir::new().unwrap();
    let platform = LocalPlatform::new(
        Handle::current(),
        dir.path().join("exports"),
        Duration::from_secs(60),
    );
    let backup = platform.backup_service(TEST_BASE_URL).unwrap();

    let state = AppState {
        backup: Arc::new(backup),
        platform,
        uploads: UploadStore::new(dir.path().join("uploads"), 1024 * 1024),
        api_config: ApiConfig::default(),
        metrics: None,
    };
    (dir, state)
}
