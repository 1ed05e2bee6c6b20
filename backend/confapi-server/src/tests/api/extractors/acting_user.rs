use crate::ActingUser;
use crate::tests::create_test_state;

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[tokio::test]
async fn test_extractor_with_username_header() {
    let (_dir, state) = create_test_state();
    let request = Request::builder()
        .header("X-Username", "alice")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = ActingUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.username, "alice");
}

#[tokio::test]
async fn test_extractor_trims_header_value() {
    let (_dir, state) = create_test_state();
    let request = Request::builder()
        .header("X-Username", "  bob ")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = ActingUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.0.username, "bob");
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_user_when_missing() {
    let (_dir, state) = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = ActingUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.0.username, state.api_config.default_user);
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_user_when_blank() {
    let (_dir, state) = create_test_state();
    let request = Request::builder()
        .header("X-Username", "   ")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let user = ActingUser::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert_eq!(user.0.username, "admin");
}
