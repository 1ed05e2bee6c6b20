pub mod error;
pub mod models;
pub mod services;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::archive_format::ArchiveFormat;
pub use models::archive_result::ArchiveResult;
pub use models::backup_job::BackupJob;
pub use models::backup_kind::BackupKind;
pub use models::backup_request::BackupRequest;
pub use models::export_job::{ExportJob, ExportScope};
pub use models::import_job::ImportJob;
pub use models::platform_event::PlatformEvent;
pub use models::principal::Principal;
pub use models::queue_status::QueueStatus;
pub use models::space::Space;
pub use models::tracked_task::{TaskProgress, TrackedTask};
pub use models::tracking_id::TrackingId;
pub use services::content_service::ContentService;
pub use services::event_publisher::EventPublisher;
pub use services::execution_engine::ExecutionEngine;
pub use services::progress_listener::{NoopProgress, ProgressListener};
pub use services::search_index::SearchIndex;
pub use services::task_manager::TaskManager;
pub use services::url_resolver::UrlResolver;
