//! Development-mode session verifier.
//!
//! Trusts the `X-User-Id` header as-is. Only installed when authentication is
//! disabled in config.

use crate::{AuthError, Result as AuthErrorResult, Session, SessionVerifier};

use dash_core::Identity;

use std::panic::Location;

use error_location::ErrorLocation;
use http::HeaderMap;

pub const USER_ID_HEADER: &str = "X-User-Id";

pub struct HeaderSessionVerifier {
    default_user: Option<Identity>,
}

impl HeaderSessionVerifier {
    /// `default_user` is used when the header is absent or unusable
    pub fn new(default_user: Option<Identity>) -> Self {
        Self { default_user }
    }
}

impl SessionVerifier for HeaderSessionVerifier {
    fn verify(&self, headers: &HeaderMap) -> AuthErrorResult<Session> {
        if let Some(header_value) = headers.get(USER_ID_HEADER) {
            match header_value.to_str().map(Identity::parse) {
                Ok(Ok(identity)) => {
                    log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, identity);
                    return Ok(Session::new(identity));
                }
                _ => log::warn!("Invalid user id in {} header", USER_ID_HEADER),
            }
        }

        match &self.default_user {
            Some(identity) => {
                log::debug!("Using default user ID: {}", identity);
                Ok(Session::new(identity.clone()))
            }
            None => Err(AuthError::MissingHeader {
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    fn describe(&self) -> String {
        match &self.default_user {
            Some(identity) => format!("header ({}, default user {})", USER_ID_HEADER, identity),
            None => format!("header ({})", USER_ID_HEADER),
        }
    }
}
