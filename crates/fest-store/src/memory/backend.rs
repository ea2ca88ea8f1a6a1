//! In-memory store backend
//!
//! One [`Collection`] per document kind, matching the hosted store's layout.

use fest_core::entities::{Message, Post, PostViewMarker, ReactionEvent, Reply, UserProfile};
use fest_core::{DocumentId, PostId};

use super::Collection;

/// In-process document store with live subscriptions
///
/// Implements every port trait from `fest-core`. Each mutation is atomic for
/// its single document and pushes a fresh snapshot to the affected watchers.
pub struct MemoryStore {
    pub(crate) messages: Collection<Message>,
    pub(crate) posts: Collection<Post>,
    pub(crate) replies: Collection<Reply>,
    pub(crate) view_markers: Collection<PostViewMarker>,
    pub(crate) reactions: Collection<ReactionEvent>,
    pub(crate) profiles: Collection<UserProfile>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: Collection::new("messages"),
            posts: Collection::new("posts"),
            replies: Collection::new("replies"),
            view_markers: Collection::new("post_views"),
            reactions: Collection::new("reactions"),
            profiles: Collection::new("profiles"),
        }
    }

    /// Document key for a post
    pub(crate) fn post_key(id: &PostId) -> DocumentId {
        DocumentId::new(id.as_str())
    }

    /// Document key for a profile
    pub(crate) fn profile_key(id: &fest_core::UserId) -> DocumentId {
        DocumentId::new(id.as_str())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
