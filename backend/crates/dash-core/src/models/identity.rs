//! Authenticated user identity.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::Serialize;

/// Longest user id accepted anywhere in the system
pub const MAX_IDENTITY_LENGTH: usize = 128;

/// Opaque, stable user identifier.
///
/// The id is used verbatim as a directory component under the storage root,
/// so only `[A-Za-z0-9_-]` is accepted. Anything else is rejected at the
/// boundary rather than escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Parse a raw user id (route segment, token subject, header value).
    ///
    /// A blank value is reported as missing rather than malformed. Any other
    /// value must match exactly; surrounding whitespace is malformed.
    #[track_caller]
    pub fn parse(value: &str) -> CoreErrorResult<Self> {
        if value.trim().is_empty() {
            return Err(CoreError::MissingIdentity {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if value.len() > MAX_IDENTITY_LENGTH {
            return Err(CoreError::InvalidIdentity {
                value: value.chars().take(32).collect(),
                message: format!("exceeds maximum length of {}", MAX_IDENTITY_LENGTH),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(CoreError::InvalidIdentity {
                value: value.to_string(),
                message: format!("unsupported character {:?}", c),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identity {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
