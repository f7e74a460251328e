pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::{Identity, MAX_IDENTITY_LENGTH};
pub use models::stored_image_path::StoredImagePath;
pub use models::user_profile::UserProfile;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
