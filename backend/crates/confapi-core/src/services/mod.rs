pub mod content_service;
pub mod event_publisher;
pub mod execution_engine;
pub mod progress_listener;
pub mod search_index;
pub mod task_manager;
pub mod url_resolver;
