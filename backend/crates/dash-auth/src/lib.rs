pub mod claims;
pub mod error;
pub mod header_session_verifier;
pub mod jwt_algorithm;
pub mod jwt_session_verifier;
pub mod jwt_validator;
pub mod session;
pub mod session_verifier;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use header_session_verifier::{HeaderSessionVerifier, USER_ID_HEADER};
pub use jwt_algorithm::JwtAlgorithm;
pub use jwt_session_verifier::JwtSessionVerifier;
pub use jwt_validator::JwtValidator;
pub use session::Session;
pub use session_verifier::{SessionVerifier, bearer_token};
