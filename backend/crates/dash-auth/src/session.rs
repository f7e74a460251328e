use dash_core::Identity;

/// A verified session. `identity` is the only value trusted for storage
/// placement and record updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identity: Identity,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl Session {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            email: None,
            name: None,
        }
    }
}
