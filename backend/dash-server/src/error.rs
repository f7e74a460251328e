use dash_auth::AuthError;
use dash_config::ConfigError;
use dash_core::CoreError;
use dash_db::DbError;
use dash_storage::StorageError;

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup failures. Request-time failures go through `ApiError`.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Auth setup error: {0}")]
    Auth(#[from] AuthError),

    #[error("Invalid default user id: {0}")]
    DefaultUser(#[from] CoreError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
