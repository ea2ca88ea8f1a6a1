//! Reply entity - a comment in a post's reply thread

use serde::{Deserialize, Serialize};

use crate::value_objects::{DocumentId, EventTime, PostId, UserId};

/// Reply entity
///
/// Belongs to exactly one post; immutable apart from explicit delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: DocumentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: EventTime,
}

impl Reply {
    /// Create a new Reply with a pending server timestamp
    pub fn new(id: DocumentId, post_id: PostId, author_id: UserId, content: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            content,
            created_at: EventTime::Pending,
        }
    }

    /// True if `user` authored this reply
    #[inline]
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author_id == *user
    }
}
