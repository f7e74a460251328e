use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("User id is required {location}")]
    MissingIdentity { location: ErrorLocation },

    #[error("Invalid user id '{value}': {message} {location}")]
    InvalidIdentity {
        value: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid stored image path '{value}': {message} {location}")]
    InvalidStoredPath {
        value: String,
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
