use crate::{ApiError, ApiResult, AppState};

use std::panic::Location;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, exports) = if state.platform.engine.export_dir().is_dir() {
        ("healthy", "operational")
    } else {
        ("degraded", "missing")
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "exports": exports,
            "tasks": state.platform.task_manager.task_count(),
            "spaces": state.platform.content.list_spaces().len(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can exports be written?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.platform.engine.export_dir().is_dir() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Export directory missing").into_response()
    }
}

/// GET /metrics - Prometheus text exposition
pub async fn metrics(State(state): State<AppState>) -> ApiResult<String> {
    state
        .metrics
        .as_ref()
        .map(|handle| handle.render())
        .ok_or_else(|| ApiError::NotFound {
            message: "Metrics recorder is not installed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
