pub mod content_service;
pub mod event_bus;
pub mod execution_engine;
pub mod local_platform;
pub mod search_index;
pub mod task_manager;
pub mod url_resolver;

#[cfg(test)]
mod tests;

pub use content_service::InMemoryContentService;
pub use event_bus::BroadcastEventBus;
pub use execution_engine::{DOWNLOAD_PATH, LocalExecutionEngine};
pub use local_platform::LocalPlatform;
pub use search_index::LocalSearchIndex;
pub use task_manager::LocalTaskManager;
pub use url_resolver::{BaseUrlResolver, REST_PATH};
