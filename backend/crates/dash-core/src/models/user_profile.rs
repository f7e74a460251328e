//! User record as seen by the dashboard.

use crate::{Identity, StoredImagePath};

use chrono::{DateTime, Utc};

/// The subset of a user row this service reads and writes.
/// Email and name are owned by the auth provider and only mirrored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: Identity,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Current profile picture, if one was ever uploaded
    pub image: Option<StoredImagePath>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a profile with no picture
    pub fn new(id: Identity) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: None,
            name: None,
            image: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
