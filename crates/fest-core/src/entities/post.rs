//! Post entity - a feed post that can gather replies, reactions, and RSVPs

use serde::{Deserialize, Serialize};

use crate::value_objects::{PostId, UserId};

/// Feed post entity
///
/// Only the fields the realtime core consumes: authorship and publication
/// state drive the inbox aggregation, `attendees` backs the RSVP toggle.
/// Body, media, and the rest of the post document stay with the feed layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default)]
    pub attendees: Vec<UserId>,
}

fn default_published() -> bool {
    true
}

impl Post {
    /// Create a new published Post with no attendees
    pub fn new(id: PostId, author_id: UserId) -> Self {
        Self {
            id,
            author_id,
            published: true,
            attendees: Vec::new(),
        }
    }

    /// True if `user` authored this post
    #[inline]
    pub fn is_authored_by(&self, user: &UserId) -> bool {
        self.author_id == *user
    }

    /// True if `user` has RSVP'd to this post
    pub fn is_attending(&self, user: &UserId) -> bool {
        self.attendees.contains(user)
    }

    /// Add `user` to the attendee list (array-union: no duplicates)
    pub fn add_attendee(&mut self, user: UserId) {
        if !self.attendees.contains(&user) {
            self.attendees.push(user);
        }
    }

    /// Remove `user` from the attendee list
    pub fn remove_attendee(&mut self, user: &UserId) {
        self.attendees.retain(|a| a != user);
    }
}
