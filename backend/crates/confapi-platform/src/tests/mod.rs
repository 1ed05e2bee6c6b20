
use crate::{InMemoryContentService, LocalExecutionEngine};

use confapi_core::{Principal, Space};

use std::sync::Arc;

use tempfile::TempDir;

pub(crate) fn actor() -> Principal {
    Principal::new("admin")
}

/// Content service with one space plus an engine exporting into a temp dir
pub(crate) fn engine_with_space(key: &str) -> (TempDir, Arc<InMemoryContentService>, LocalExecutionEngine) {
    let temp = TempDir::new().unwrap();
    let content = Arc::new(InMemoryContentService::new());
    content.create_space(Space::new(key, format!("{} Space", key)));
    let engine = LocalExecutionEngine::new(content.clone(), temp.path().join("exports"));
    (temp, content, engine)
}
