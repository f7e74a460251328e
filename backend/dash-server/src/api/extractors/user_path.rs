use crate::ApiError;

use dash_core::Identity;

use std::future::Future;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// The `{user_id}` route segment, parsed into an `Identity`.
///
/// A blank value (e.g. `%20`) or one that fails identity validation, padded
/// ids like `%20u1` included, is rejected with 400 and `field: "user_id"`.
pub struct UserPath(pub Identity);

impl<S> FromRequestParts<S> for UserPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Path(raw) = Path::<String>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    ApiError::validation(
                        format!("Invalid user id: {}", e.body_text()),
                        Some("user_id"),
                    )
                })?;

            let identity = Identity::parse(&raw)
                .map_err(|e| ApiError::from(e).with_field("user_id"))?;

            Ok(UserPath(identity))
        }
    }
}
