//! User profile REST API handlers
//!
//! Read-only. Profiles are only visible to the user they describe.

use crate::{ApiError, ApiResult, AppState, AuthSession, UserDto, UserPath, UserResponse};

use dash_core::Identity;

use axum::{Json, extract::State};

/// GET /api/v1/users/me
///
/// Profile of the calling user
pub async fn get_me(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
) -> ApiResult<Json<UserResponse>> {
    load_profile(&state, &session.identity).await
}

/// GET /api/v1/users/{user_id}
///
/// Profile of a specific user; callers may only read their own
pub async fn get_user(
    State(state): State<AppState>,
    AuthSession(session): AuthSession,
    UserPath(user_id): UserPath,
) -> ApiResult<Json<UserResponse>> {
    if session.identity != user_id {
        state.metrics.access_denied("not_owner");
        return Err(ApiError::forbidden(format!(
            "Cannot read the profile of user {}",
            user_id
        )));
    }

    load_profile(&state, &user_id).await
}

async fn load_profile(state: &AppState, id: &Identity) -> ApiResult<Json<UserResponse>> {
    let profile = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse {
        user: profile.into(),
    }))
}
