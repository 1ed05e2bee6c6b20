pub mod archive_format;
pub mod archive_result;
pub mod backup_job;
pub mod backup_kind;
pub mod backup_request;
pub mod export_job;
pub mod import_job;
pub mod platform_event;
pub mod principal;
pub mod queue_status;
pub mod space;
pub mod tracked_task;
pub mod tracking_id;
