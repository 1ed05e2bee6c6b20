#![allow(dead_code)]

//! Test infrastructure for confapi-server API tests

use confapi_config::ApiConfig;
use confapi_core::Space;
use confapi_platform::LocalPlatform;
use confapi_server::{AppState, UploadStore, build_router};

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tokio::runtime::Handle;
use tower::ServiceExt;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const BASE_URL: &str = "http://localhost:8000";
pub const API: &str = "/rest/confapi/1";
pub const SPACE_KEY: &str = "DOCS";

/// Platform-backed state rooted in a temp dir that lives as long as the app
pub struct TestApp {
    pub state: AppState,
    pub platform: LocalPlatform,
    pub dir: TempDir,
}

/// Create a test app with one existing space; call from inside a runtime
pub fn create_test_app() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let export_dir = dir.path().join("exports");
    std::fs::create_dir_all(&export_dir).expect("Failed to create export dir");
    let platform = LocalPlatform::new(
        Handle::current(),
        export_dir,
        Duration::from_secs(60),
    );
    platform
        .content
        .create_space(Space::new(SPACE_KEY, "Documentation"));

    let backup = platform
        .backup_service(BASE_URL)
        .expect("Failed to build backup service");

    let state = AppState {
        backup: Arc::new(backup),
        platform: platform.clone(),
        uploads: UploadStore::new(dir.path().join("uploads"), 10 * 1024 * 1024),
        api_config: ApiConfig::default(),
        metrics: None,
    };

    TestApp {
        state,
        platform,
        dir,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }
}

/// Send one request through a fresh router
pub async fn send(
    app: &TestApp,
    method: Method,
    uri: &str,
    user: Option<&str>,
    content_type: Option<&str>,
    body: Body,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-Username", user);
    }
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(body).unwrap();

    let response = build_router(app.state.clone())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &TestApp, uri: &str, user: Option<&str>) -> TestResponse {
    send(app, Method::GET, uri, user, None, Body::empty()).await
}

pub async fn post_export(
    app: &TestApp,
    request: serde_json::Value,
    run_async: bool,
    user: Option<&str>,
) -> TestResponse {
    let uri = if run_async {
        format!("{}/backup/export?async=true", API)
    } else {
        format!("{}/backup/export", API)
    };
    send(
        app,
        Method::POST,
        &uri,
        user,
        Some("application/json"),
        Body::from(request.to_string()),
    )
    .await
}

pub async fn put_import(
    app: &TestApp,
    archive: Vec<u8>,
    run_async: bool,
    user: Option<&str>,
) -> TestResponse {
    let uri = if run_async {
        format!("{}/backup/import?async=true", API)
    } else {
        format!("{}/backup/import", API)
    };
    send(
        app,
        Method::PUT,
        &uri,
        user,
        Some("application/zip"),
        Body::from(archive),
    )
    .await
}

/// Path and query of an absolute URL the server handed out
pub fn local_path(url: &str) -> String {
    url.strip_prefix(BASE_URL)
        .expect("URL is not under the base URL")
        .to_string()
}

/// Poll a queue URL until the task reports completion
pub async fn wait_for_completion(app: &TestApp, queue_url: &str, user: Option<&str>) -> serde_json::Value {
    let path = local_path(queue_url);
    for _ in 0..200 {
        let response = get(app, &path, user).await;
        assert_eq!(response.status, StatusCode::OK);
        let status = response.json();
        if status["complete"] == true {
            return status;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Task at {} did not complete", queue_url);
}

/// Export the test space synchronously and return the archive bytes
pub async fn export_archive(app: &TestApp) -> Vec<u8> {
    let response = post_export(app, serde_json::json!({ "spaceKey": SPACE_KEY }), false, None).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let download = get(app, &local_path(response.json()["downloadUrl"].as_str().unwrap()), None).await;
    assert_eq!(download.status, StatusCode::OK);
    download.body
}

/// Build a zip archive from (name, contents) pairs
pub fn build_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
