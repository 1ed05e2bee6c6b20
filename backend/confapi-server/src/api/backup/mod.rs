pub mod backup_query;
pub mod export;
pub mod export_response;
pub mod import;
pub mod import_response;
pub mod queue;
pub mod task_accepted_response;
