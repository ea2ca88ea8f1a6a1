//! Data transfer objects
//!
//! Request DTOs carry caller input with validation rules; response DTOs are
//! the derived values the services hand back to the presentation layer.

pub mod requests;
pub mod responses;

pub use requests::SendMessageRequest;
pub use responses::{BalanceSummary, InboxItem, PostReactionSummary};
