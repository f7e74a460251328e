use crate::ApiError;

use dash_auth::AuthError;
use dash_core::{CoreError, Identity};
use dash_storage::StorageError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Item not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Item not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Uploaded file is empty", Some("file"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "file");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("no session")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let (status, json) = body_json(ApiError::forbidden("not yours")).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let (status, json) = body_json(ApiError::bad_request("not multipart")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_with_field_only_touches_validation_errors() {
    let validation = ApiError::validation("bad", None).with_field("user_id");
    let not_found = ApiError::not_found("gone").with_field("user_id");

    assert!(matches!(
        validation,
        ApiError::Validation { field: Some(ref f), .. } if f == "user_id"
    ));
    assert!(matches!(not_found, ApiError::NotFound { .. }));
}

#[test]
fn test_empty_blob_maps_to_validation_on_file_field() {
    let error = ApiError::from(StorageError::EmptyBlob {
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(matches!(
        error,
        ApiError::Validation { field: Some(ref f), .. } if f == "file"
    ));
}

#[test]
fn test_missing_blob_maps_to_404() {
    let error = ApiError::from(StorageError::not_found("users/u1/images/abc"));

    assert_eq!(error.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_storage_io_error_hides_filesystem_details() {
    let error = ApiError::from(StorageError::io(
        "/srv/secret/storage/users/u1",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    ));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("/srv/secret"));
}

#[test]
fn test_auth_error_maps_to_401() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn test_blank_identity_maps_to_400() {
    let core_error: CoreError = Identity::parse("   ").unwrap_err();

    let error = ApiError::from(core_error);

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}
