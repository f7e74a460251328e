use dash_core::UserProfile;

use serde::Serialize;

/// User profile as returned by the REST API
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Where to fetch the picture, `None` until the user uploads one
    pub image_url: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<UserProfile> for UserDto {
    fn from(profile: UserProfile) -> Self {
        let image_url = profile
            .has_image()
            .then(|| format!("/api/v1/users/{}/image", profile.id));

        Self {
            id: profile.id.to_string(),
            email: profile.email,
            name: profile.name,
            image_url,
            created_at: profile.created_at.timestamp(),
            updated_at: profile.updated_at.timestamp(),
        }
    }
}
