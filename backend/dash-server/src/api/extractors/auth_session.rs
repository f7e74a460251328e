//! Axum extractors for REST API authentication

use crate::{ApiError, ApiResult, AppState};

use dash_auth::Session;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

/// A verified caller.
///
/// Runs the configured `SessionVerifier` against the request headers. As a
/// parts extractor it resolves before any body extractor, so a request
/// without a session is rejected with 401 before its body is read.
pub struct AuthSession(pub Session);

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { authenticate(state, &parts.headers).map(AuthSession) }
    }
}

/// Verify the request's session, counting failures as access denials
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> ApiResult<Session> {
    match state.sessions.verify(headers) {
        Ok(session) => {
            log::debug!("Authenticated request for user {}", session.identity);
            Ok(session)
        }
        Err(e) => {
            state.metrics.access_denied("unauthenticated");
            Err(ApiError::from(e))
        }
    }
}
