use crate::{AuthError, Result as AuthErrorResult, Session};

use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderMap;
use http::header::AUTHORIZATION;

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves request credentials to a user session.
///
/// Any error means "no session"; callers map every failure to 401 and only
/// use the error for logging.
pub trait SessionVerifier: Send + Sync {
    fn verify(&self, headers: &HeaderMap) -> AuthErrorResult<Session>;

    /// Short label for startup logs
    fn describe(&self) -> String;
}

/// Extract the token from an `Authorization: Bearer <token>` header
#[track_caller]
pub fn bearer_token(headers: &HeaderMap) -> AuthErrorResult<&str> {
    let auth_header = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

    let token = auth_header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidToken {
            message: "empty bearer token".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
