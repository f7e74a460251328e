use crate::{JwtValidator, Result as AuthErrorResult, Session, SessionVerifier, bearer_token};

use http::HeaderMap;

/// Verifies `Authorization: Bearer <jwt>` session tokens
pub struct JwtSessionVerifier {
    validator: JwtValidator,
}

impl JwtSessionVerifier {
    pub fn new(validator: JwtValidator) -> Self {
        Self { validator }
    }
}

impl SessionVerifier for JwtSessionVerifier {
    fn verify(&self, headers: &HeaderMap) -> AuthErrorResult<Session> {
        let token = bearer_token(headers)?;
        let claims = self.validator.validate(token)?;
        let identity = claims.validate()?;

        Ok(Session {
            identity,
            email: claims.email,
            name: claims.name,
        })
    }

    fn describe(&self) -> String {
        format!("jwt ({})", self.validator.algorithm())
    }
}
