//! User profile - identity fields mirrored from the auth collaborator

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Profile document for a signed-in user
///
/// All fields are opaque strings owned by the external authentication
/// provider; this core never interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub email: Option<String>,
}

impl UserProfile {
    /// Create a profile with only the stable id set
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            display_name: None,
            photo_url: None,
            email: None,
        }
    }

    /// Display name, falling back to "Anonymous" like the UI does
    pub fn display_name_or_default(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Anonymous")
    }
}
