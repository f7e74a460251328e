use std::str::FromStr;

use serde::Deserialize;

/// Who may fetch a user's profile picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageAccessPolicy {
    /// Anyone who knows the user id
    #[default]
    Public,
    /// Any caller with a valid session
    Authenticated,
    /// Only the user the picture belongs to
    Owner,
}

impl ImageAccessPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Authenticated => "authenticated",
            Self::Owner => "owner",
        }
    }

    pub fn requires_session(&self) -> bool {
        !matches!(self, Self::Public)
    }
}

impl FromStr for ImageAccessPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "authenticated" => Ok(Self::Authenticated),
            "owner" => Ok(Self::Owner),
            other => Err(format!("unknown image access policy '{}'", other)),
        }
    }
}

impl std::fmt::Display for ImageAccessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
