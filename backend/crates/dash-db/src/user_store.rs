use crate::Result as DbErrorResult;

use dash_core::{Identity, StoredImagePath, UserProfile};

use async_trait::async_trait;

/// Persistence for the per-user profile picture pointer.
///
/// The HTTP layer only talks to this trait, so the relational store can be
/// swapped without touching the upload/serve handlers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load a full user record
    async fn find_by_id(&self, id: &Identity) -> DbErrorResult<Option<UserProfile>>;

    /// Current image path, `None` if the user is unknown or never uploaded
    async fn get_image(&self, id: &Identity) -> DbErrorResult<Option<StoredImagePath>>;

    /// Point the user's image at `image`, creating the user row if needed.
    /// Returns the path that was replaced, if any.
    async fn set_image(
        &self,
        id: &Identity,
        image: &StoredImagePath,
    ) -> DbErrorResult<Option<StoredImagePath>>;

    /// Create the user row if missing and refresh mirrored profile fields.
    /// `None` leaves the stored value untouched.
    async fn ensure_user(
        &self,
        id: &Identity,
        email: Option<&str>,
        name: Option<&str>,
    ) -> DbErrorResult<()>;

    /// Cheap round trip used by readiness checks
    async fn ping(&self) -> DbErrorResult<()>;
}
