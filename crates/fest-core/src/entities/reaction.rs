//! Reaction event - one appended entry in the JENbucks event log

use serde::{Deserialize, Serialize};

use crate::value_objects::{DocumentId, EventTime, PostId, UserId};

/// Append-only JENbucks reaction event
///
/// `user_id` spends one buck on `post_id`; `author_id` (the post's author)
/// receives it. `amount` is always 1, so totals are plain counts and the
/// whole ledger is recomputable from history at any time. Events are never
/// mutated or deleted in normal operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEvent {
    pub id: DocumentId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub author_id: UserId,
    pub amount: i64,
    pub created_at: EventTime,
}

impl ReactionEvent {
    /// Create a new single-buck reaction with a pending server timestamp
    pub fn new(id: DocumentId, post_id: PostId, user_id: UserId, author_id: UserId) -> Self {
        Self {
            id,
            post_id,
            user_id,
            author_id,
            amount: 1,
            created_at: EventTime::Pending,
        }
    }

    /// True if the spender reacted to their own post
    #[inline]
    pub fn is_self_reaction(&self) -> bool {
        self.user_id == self.author_id
    }
}
