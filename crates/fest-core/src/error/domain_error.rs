//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{DocumentId, PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Message not found: {0}")]
    MessageNotFound(DocumentId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Precondition Failures
    // =========================================================================
    #[error("not signed in")]
    NotSignedIn,

    #[error("no JENbucks left")]
    NoFundsLeft,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not message sender")]
    NotMessageSender,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Subscription lapsed: {0}")]
    SubscriptionLapsed(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for callers that want a stable identifier
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::NotSignedIn => "NOT_SIGNED_IN",
            Self::NoFundsLeft => "NO_FUNDS_LEFT",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::NotMessageSender => "NOT_MESSAGE_SENDER",
            Self::StoreError(_) => "STORE_ERROR",
            Self::SubscriptionLapsed(_) => "SUBSCRIPTION_LAPSED",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::MessageNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a rejected precondition (auth or balance)
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::NotSignedIn | Self::NoFundsLeft)
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_) | Self::ContentTooLong { .. })
    }
}
