use crate::tests::{create_test_state, identity};
use crate::{ApiError, AuthSession};

use dash_auth::HeaderSessionVerifier;

use std::sync::Arc;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use tempfile::TempDir;

#[tokio::test]
async fn test_extractor_with_valid_header() {
    let temp = TempDir::new().unwrap();
    let state = create_test_state(&temp).await;
    let request = Request::builder()
        .header("X-User-Id", "u1")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.identity, identity("u1"));
}

#[tokio::test]
async fn test_extractor_rejects_missing_header_without_default_user() {
    let temp = TempDir::new().unwrap();
    let state = create_test_state(&temp).await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_falls_back_to_default_user_when_missing() {
    let temp = TempDir::new().unwrap();
    let mut state = create_test_state(&temp).await;
    state.sessions = Arc::new(HeaderSessionVerifier::new(Some(identity("desktop-user"))));
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.identity, identity("desktop-user"));
}

#[tokio::test]
async fn test_extractor_falls_back_when_header_invalid() {
    let temp = TempDir::new().unwrap();
    let mut state = create_test_state(&temp).await;
    state.sessions = Arc::new(HeaderSessionVerifier::new(Some(identity("desktop-user"))));
    let request = Request::builder()
        .header("X-User-Id", "../../etc")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthSession::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0.identity, identity("desktop-user"));
}
