#![allow(dead_code)]

//! Test infrastructure for dash-server API tests

use dash_auth::{HeaderSessionVerifier, JwtSessionVerifier, JwtValidator};
use dash_config::ImageAccessPolicy;
use dash_core::Identity;
use dash_db::UserRepository;
use dash_server::{AppState, Metrics, build_router};
use dash_storage::ImageStore;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use tempfile::TempDir;
use tower::ServiceExt;

pub const JWT_SECRET: &[u8] = b"test-secret-that-is-at-least-32-bytes!!";
pub const BOUNDARY: &str = "dash-test-boundary";

/// Create AppState for testing: in-memory SQLite, temp storage root,
/// `X-User-Id` trusted with no default user
pub async fn create_test_app_state(storage: &TempDir) -> AppState {
    let pool = dash_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState {
        users: Arc::new(UserRepository::new(pool)),
        sessions: Arc::new(HeaderSessionVerifier::new(None)),
        images: ImageStore::new(storage.path()),
        image_access: ImageAccessPolicy::Public,
        delete_replaced_images: false,
        max_upload_bytes: 0,
        metrics: Metrics::new(),
    }
}

/// Same as `create_test_app_state` but backed by a WAL database file in
/// `database_dir`, so concurrent requests use separate connections
pub async fn create_file_backed_app_state(storage: &TempDir, database_dir: &TempDir) -> AppState {
    let pool = dash_db::connect(&database_dir.path().join("data.db"))
        .await
        .expect("Failed to create test database");

    let mut state = create_test_app_state(storage).await;
    state.users = Arc::new(UserRepository::new(pool));
    state
}

/// Same as `create_test_app_state` but sessions come from HS256 bearer tokens
pub async fn create_jwt_app_state(storage: &TempDir) -> AppState {
    let mut state = create_test_app_state(storage).await;
    state.sessions = Arc::new(JwtSessionVerifier::new(JwtValidator::with_hs256(
        JWT_SECRET,
    )));
    state
}

pub fn identity(raw: &str) -> Identity {
    Identity::parse(raw).unwrap()
}

/// Mint an HS256 token for `sub`, valid for an hour unless `exp_offset` says otherwise
pub fn token_for(sub: &str, exp_offset_secs: i64) -> String {
    token_with_email(sub, &format!("{}@example.com", sub), exp_offset_secs)
}

pub fn token_with_email(sub: &str, email: &str, exp_offset_secs: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": sub,
        "iat": now,
        "exp": now + exp_offset_secs,
        "email": email,
        "name": format!("User {}", sub),
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET),
    )
    .expect("Failed to encode test token")
}

pub fn bearer(sub: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token_for(sub, 3600)))
}

pub fn user_header(user: &str) -> (header::HeaderName, String) {
    (header::HeaderName::from_static("x-user-id"), user.to_string())
}

/// Encode a multipart/form-data body with one part per `(name, bytes)`
pub fn multipart_body(parts: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, bytes) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}.bin\"\r\n",
                name, name
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

/// POST a single-`file` upload
pub fn upload_request(bytes: &[u8], auth: Option<(header::HeaderName, String)>) -> Request<Body> {
    upload_request_with_parts(&[("file", bytes)], auth)
}

pub fn upload_request_with_parts(
    parts: &[(&str, &[u8])],
    auth: Option<(header::HeaderName, String)>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/users/me/image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        );
    if let Some((name, value)) = auth {
        builder = builder.header(name, value);
    }
    builder.body(Body::from(multipart_body(parts))).unwrap()
}

pub fn get_request(uri: &str, auth: Option<(header::HeaderName, String)>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some((name, value)) = auth {
        builder = builder.header(name, value);
    }
    builder.body(Body::empty()).unwrap()
}

/// Run one request through a fresh router
pub async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, HeaderMap, Bytes) {
    let app: Router = build_router(state.clone());
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body)
}

pub fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}

/// Upload `bytes` as `user` via the X-User-Id header and return the stored path
pub async fn upload_as(state: &AppState, user: &str, bytes: &[u8]) -> String {
    let (status, _, body) = send(state, upload_request(bytes, Some(user_header(user)))).await;
    assert_eq!(status, StatusCode::CREATED);
    json(&body)["path"].as_str().unwrap().to_string()
}

/// Image files (not temporaries) under a user's image directory
pub fn stored_images(root: &Path, user: &str) -> Vec<PathBuf> {
    let dir = root.join("users").join(user).join("images");
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    entries
        .map(|e| e.unwrap().path())
        .filter(|p| p.extension().is_none())
        .collect()
}
