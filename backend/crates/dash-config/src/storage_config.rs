use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_ROOT, ImageAccessPolicy};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Image root. Relative values resolve against the config directory.
    /// Stored image paths are relative to this, so changing it orphans them.
    pub root: String,
    pub image_access: ImageAccessPolicy,
    /// Delete the previous picture after a successful replacement
    pub delete_replaced_images: bool,
    /// Request body cap for uploads; 0 disables the limit
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: String::from(DEFAULT_STORAGE_ROOT),
            image_access: ImageAccessPolicy::default(),
            delete_replaced_images: false,
            max_upload_bytes: 0,
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.root.trim().is_empty() {
            return Err(ConfigError::storage("storage.root cannot be empty"));
        }

        Ok(())
    }
}
