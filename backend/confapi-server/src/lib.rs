pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod retention;
pub mod routes;
pub mod shutdown;
pub mod state;
pub mod uploads;

#[cfg(test)]
mod tests;

pub use api::{
    backup::{
        backup_query::BackupQuery,
        export::export_space,
        export_response::ExportResponse,
        import::import_space,
        import_response::{IMPORT_STATUS_IMPORTED, ImportResponse},
        queue::get_queue_status,
        task_accepted_response::TaskAcceptedResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::acting_user::{ActingUser, USERNAME_HEADER},
    ping::ping,
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use retention::run_retention_loop;
pub use shutdown::{ShutdownListener, ShutdownSignal};
pub use state::AppState;
pub use uploads::UploadStore;

pub use crate::routes::build_router;
