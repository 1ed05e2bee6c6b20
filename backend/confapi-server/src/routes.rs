use crate::{AppState, export_space, get_queue_status, health, import_space, ping};

use confapi_platform::{DOWNLOAD_PATH, REST_PATH};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let export_dir = state.platform.engine.export_dir().to_path_buf();

    let api = Router::new()
        .route("/ping", get(ping))
        .route("/backup/export", post(export_space))
        .route("/backup/import", put(import_space))
        .route("/backup/queue/{tracking_id}", get(get_queue_status))
        // Import bodies are whole archives
        .layer(DefaultBodyLimit::max(state.uploads.max_bytes()));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        .nest(REST_PATH, api)
        // Exported archives, addressed by the URIs the export returns
        .nest_service(&format!("/{}", DOWNLOAD_PATH), ServeDir::new(export_dir))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
