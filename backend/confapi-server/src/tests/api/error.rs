use crate::ApiError;

use confapi_backup::BackupError;
use confapi_core::{CoreError, TrackingId};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use tokio::task::JoinHandle;

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Space DOCS not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Space DOCS not found");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let error = ApiError::BadRequest {
        message: "Import archive is empty".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "Export of space 'DOCS' failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_backup_errors_keep_their_category() {
    assert!(matches!(
        ApiError::from(BackupError::bad_request("blank key")),
        ApiError::BadRequest { .. }
    ));
    assert!(matches!(
        ApiError::from(BackupError::not_found("no such space")),
        ApiError::NotFound { .. }
    ));
    assert!(matches!(
        ApiError::from(BackupError::internal("disk full")),
        ApiError::Internal { .. }
    ));
}

#[test]
fn test_backup_error_message_is_preserved() {
    let error = ApiError::from(BackupError::not_found("Space 'DOCS' does not exist"));

    match error {
        ApiError::NotFound { message, .. } => assert_eq!(message, "Space 'DOCS' does not exist"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_invalid_tracking_id_converts_to_bad_request() {
    let core_error: CoreError = TrackingId::parse("not-a-uuid").unwrap_err();

    assert!(matches!(
        ApiError::from(core_error),
        ApiError::BadRequest { .. }
    ));
}

#[test]
fn test_engine_failure_converts_to_internal() {
    assert!(matches!(
        ApiError::from(CoreError::engine("worker crashed")),
        ApiError::Internal { .. }
    ));
}

#[tokio::test]
async fn test_join_error_converts_to_internal() {
    let handle: JoinHandle<()> = tokio::task::spawn_blocking(|| panic!("boom"));
    let join_error = handle.await.unwrap_err();

    assert!(matches!(
        ApiError::from(join_error),
        ApiError::Internal { .. }
    ));
}
