//! Post view marker - per-user, per-post "last viewed" high-water mark

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{DocumentId, PostId, UserId};

/// High-water mark recording when a user last opened a post's reply thread
///
/// One document per `(user, post)` pair, upserted (create-or-replace) every
/// time the thread is opened. Replies newer than the mark count as unread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostViewMarker {
    pub user_id: UserId,
    pub post_id: PostId,
    pub last_viewed_at: DateTime<Utc>,
}

impl PostViewMarker {
    /// Create a marker stamped with the current time
    pub fn now(user_id: UserId, post_id: PostId) -> Self {
        Self {
            user_id,
            post_id,
            last_viewed_at: Utc::now(),
        }
    }

    /// Composite document key, unique per `(user, post)` pair
    pub fn key(&self) -> DocumentId {
        Self::key_for(&self.user_id, &self.post_id)
    }

    /// Composite document key for the given pair
    pub fn key_for(user_id: &UserId, post_id: &PostId) -> DocumentId {
        DocumentId::new(format!("{user_id}:{post_id}"))
    }

    /// True if a reply created at `at` is newer than this mark
    pub fn is_before(&self, at: DateTime<Utc>) -> bool {
        at > self.last_viewed_at
    }
}
