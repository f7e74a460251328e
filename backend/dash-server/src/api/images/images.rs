//! Profile picture REST API handlers
//!
//! Upload writes the blob before touching the user record, so a record only
//! ever points at a fully written file. Serve streams the file straight from
//! disk.

use crate::{ApiError, ApiResult, AppState, AuthSession, UploadResponse, UserPath, authenticate};

use dash_config::ImageAccessPolicy;
use dash_core::{Identity, StoredImagePath};
use dash_db::DbError;
use dash_storage::StorageError;

use axum::{
    Json,
    body::Body,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use log::{debug, info, warn};

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

const OCTET_STREAM: &str = "application/octet-stream";

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/users/me/image
///
/// Store a new profile picture for the calling user
pub async fn upload_image(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let identity = &session.identity;

    let bytes = read_file_field(multipart)
        .await
        .inspect_err(|_| state.metrics.upload_rejected("invalid_form"))?;

    if bytes.is_empty() {
        state.metrics.upload_rejected("empty_file");
        return Err(ApiError::validation(
            "Uploaded file is empty",
            Some(FILE_FIELD),
        ));
    }

    let path = state.images.write(identity, &bytes).await?;

    // Email and name are display-only; a failed mirror never fails the upload
    if (session.email.is_some() || session.name.is_some())
        && let Err(e) = state
            .users
            .ensure_user(identity, session.email.as_deref(), session.name.as_deref())
            .await
    {
        warn!("Failed to mirror profile fields for {}: {}", identity, e);
    }

    let previous = state.users.set_image(identity, &path).await?;

    state.metrics.image_uploaded(bytes.len());
    info!(
        "User {} uploaded profile picture {} ({} bytes)",
        identity,
        path,
        bytes.len()
    );

    if let Some(previous) = previous {
        remove_replaced(&state, identity, &previous, &path).await;
    }

    Ok((StatusCode::CREATED, Json(UploadResponse::new(&path))))
}

/// GET /api/v1/users/{user_id}/image
///
/// Stream a user's profile picture, subject to the configured access policy
pub async fn serve_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    UserPath(user_id): UserPath,
) -> ApiResult<Response> {
    authorize_image_access(&state, &headers, &user_id)?;
    stream_image(&state, &user_id).await
}

/// GET /api/v1/users/me/image
///
/// Stream the calling user's own profile picture
pub async fn serve_my_image(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<Response> {
    stream_image(&state, &session.identity).await
}

// =============================================================================
// Helpers
// =============================================================================

/// Pull the bytes of the `file` field; other fields are skipped
async fn read_file_field(multipart: Result<Multipart, MultipartRejection>) -> ApiResult<Bytes> {
    let mut multipart = multipart?;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(FILE_FIELD) {
            return Ok(field.bytes().await?);
        }
        debug!("Skipping multipart field {:?}", field.name());
    }

    Err(ApiError::validation(
        format!("Missing '{}' field in form", FILE_FIELD),
        Some(FILE_FIELD),
    ))
}

fn authorize_image_access(
    state: &AppState,
    headers: &HeaderMap,
    owner: &Identity,
) -> ApiResult<()> {
    match state.image_access {
        ImageAccessPolicy::Public => Ok(()),
        ImageAccessPolicy::Authenticated => authenticate(state, headers).map(|_| ()),
        ImageAccessPolicy::Owner => {
            let session = authenticate(state, headers)?;
            if &session.identity == owner {
                Ok(())
            } else {
                state.metrics.access_denied("not_owner");
                Err(ApiError::forbidden(
                    "Profile pictures are only visible to their owner",
                ))
            }
        }
    }
}

async fn stream_image(state: &AppState, user_id: &Identity) -> ApiResult<Response> {
    let path = match state.users.get_image(user_id).await {
        Ok(Some(path)) => path,
        Ok(None) => {
            state.metrics.image_not_found();
            return Err(no_picture(user_id));
        }
        Err(DbError::InvalidRecord { message, .. }) => {
            warn!("Unusable image record for {}: {}", user_id, message);
            state.metrics.image_not_found();
            return Err(no_picture(user_id));
        }
        Err(e) => return Err(e.into()),
    };

    let blob = match state.images.open(&path).await {
        Ok(blob) => blob,
        Err(StorageError::NotFound { .. }) => {
            warn!("Record for {} points at missing file {}", user_id, path);
            state.metrics.image_not_found();
            return Err(no_picture(user_id));
        }
        Err(e) => return Err(e.into()),
    };

    let len = blob.len();
    state.metrics.image_served(len);
    debug!("Serving {} ({} bytes) for {}", path, len, user_id);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(OCTET_STREAM)),
            (header::CONTENT_LENGTH, HeaderValue::from(len)),
        ],
        Body::from_stream(blob.into_stream()),
    )
        .into_response())
}

/// Best-effort removal of a superseded image; never fails the upload
async fn remove_replaced(
    state: &AppState,
    owner: &Identity,
    previous: &StoredImagePath,
    current: &StoredImagePath,
) {
    if !state.delete_replaced_images || previous == current {
        return;
    }

    if !previous.is_owned_by(owner) {
        warn!(
            "Not removing replaced image {}: outside the directory of {}",
            previous, owner
        );
        return;
    }

    match state.images.remove(previous).await {
        Ok(true) => {
            state.metrics.replaced_image_removed();
            debug!("Removed replaced image {}", previous);
        }
        Ok(false) => debug!("Replaced image {} was already gone", previous),
        Err(e) => warn!("Failed to remove replaced image {}: {}", previous, e),
    }
}

#[track_caller]
fn no_picture(user_id: &Identity) -> ApiError {
    ApiError::not_found(format!("User {} has no profile picture", user_id))
}
