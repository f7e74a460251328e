//! Relative location of a stored profile picture.
//!
//! A `StoredImagePath` can only come from two places:
//! - [`StoredImagePath::for_new_image`], called by the image store right
//!   before it writes a fresh blob
//! - [`StoredImagePath::from_record`], called by a user record store when it
//!   loads a previously persisted value
//!
//! No `From<String>` or `Deserialize` impl exists: request data must pass
//! through the record store before it can reach the blob reader.

use crate::{CoreError, Identity, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

const USERS_DIR: &str = "users";
const IMAGES_DIR: &str = "images";

/// Path relative to the storage root, always `/`-separated
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredImagePath(String);

impl StoredImagePath {
    /// Path for a newly generated image: `users/<owner>/images/<image_id>`
    pub fn for_new_image(owner: &Identity, image_id: Uuid) -> Self {
        Self(format!(
            "{}/{}/{}/{}",
            USERS_DIR,
            owner.as_str(),
            IMAGES_DIR,
            image_id.simple()
        ))
    }

    /// Rehydrate a path loaded from the user record store.
    ///
    /// Rejects anything that could resolve outside the storage root: absolute
    /// paths, drive prefixes, backslashes, empty segments, `.` and `..`.
    #[track_caller]
    pub fn from_record(raw: impl Into<String>) -> CoreErrorResult<Self> {
        let raw = raw.into();
        let caller = Location::caller();

        let reject = |message: &str| CoreError::InvalidStoredPath {
            value: raw.clone(),
            message: message.to_string(),
            location: ErrorLocation::from(caller),
        };

        if raw.is_empty() {
            return Err(reject("path is empty"));
        }
        if raw.starts_with('/') {
            return Err(reject("path must be relative"));
        }
        if raw.contains('\\') || raw.contains(':') || raw.contains('\0') {
            return Err(reject("path contains a forbidden character"));
        }
        if raw
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(reject("path contains an empty or relative segment"));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual path components, in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Whether this path lives in `owner`'s image directory
    pub fn is_owned_by(&self, owner: &Identity) -> bool {
        let mut segments = self.segments();
        segments.next() == Some(USERS_DIR)
            && segments.next() == Some(owner.as_str())
            && segments.next() == Some(IMAGES_DIR)
    }
}

impl std::fmt::Display for StoredImagePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
