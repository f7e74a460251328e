pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod session_verifier;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::{
        auth_session::{AuthSession, authenticate},
        user_path::UserPath,
    },
    images::{
        images::{FILE_FIELD, serve_image, serve_my_image, upload_image},
        upload_response::{UPLOAD_SUCCESS_MESSAGE, UploadResponse},
    },
    users::{
        user_dto::UserDto,
        user_response::UserResponse,
        users::{get_me, get_user},
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;
pub use session_verifier::build_session_verifier;

pub use crate::routes::build_router;
