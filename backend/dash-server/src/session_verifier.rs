//! Choose how requests are authenticated, based on `auth` config

use crate::error::Result as ServerErrorResult;

use dash_auth::{HeaderSessionVerifier, JwtSessionVerifier, JwtValidator, SessionVerifier};
use dash_config::{Config, ConfigError};
use dash_core::Identity;

use std::sync::Arc;

use log::{info, warn};

/// Build the verifier for `config`.
///
/// With auth enabled this is a JWT verifier (HS256 when a secret is set,
/// otherwise RS256 from the configured public key). With auth disabled the
/// `X-User-Id` header is trusted, falling back to `auth.default_user_id`.
pub fn build_session_verifier(config: &Config) -> ServerErrorResult<Arc<dyn SessionVerifier>> {
    if !config.auth.enabled {
        warn!("Authentication DISABLED - trusting the X-User-Id header (development mode)");
        let default_user = config
            .auth
            .default_user_id
            .as_deref()
            .map(Identity::parse)
            .transpose()?;
        return Ok(Arc::new(HeaderSessionVerifier::new(default_user)));
    }

    let validator = if let Some(secret) = &config.auth.jwt_secret {
        info!("JWT: HS256 authentication enabled");
        JwtValidator::with_hs256(secret.as_bytes())
    } else if let Some(public_key) = config.jwt_public_key()? {
        info!("JWT: RS256 authentication enabled");
        JwtValidator::with_rs256(&public_key)?
    } else {
        return Err(ConfigError::auth(
            "auth.enabled requires auth.jwt_secret or auth.jwt_public_key_path",
        )
        .into());
    };

    Ok(Arc::new(JwtSessionVerifier::new(validator)))
}
