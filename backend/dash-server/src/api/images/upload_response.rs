use dash_core::StoredImagePath;

use serde::Serialize;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "Profile picture uploaded";

/// Response for a stored upload
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    /// Path of the new image, relative to the storage root
    pub path: String,
}

impl UploadResponse {
    pub fn new(path: &StoredImagePath) -> Self {
        Self {
            message: UPLOAD_SUCCESS_MESSAGE.to_string(),
            path: path.to_string(),
        }
    }
}
