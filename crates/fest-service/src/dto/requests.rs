//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and, where input rules apply,
//! `Validate`.

use serde::Deserialize;
use validator::Validate;

use fest_core::UserId;

/// Send a direct message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub recipient_id: UserId,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}

impl SendMessageRequest {
    /// Convenience constructor for callers assembling requests in code
    pub fn new(recipient_id: UserId, content: impl Into<String>) -> Self {
        Self {
            recipient_id,
            content: content.into(),
        }
    }
}
