//! Message entity - a direct message between two users

use serde::{Deserialize, Serialize};

use crate::value_objects::{DocumentId, EventTime, UserId};

/// Direct message entity
///
/// Created by the sender with a pending creation time and `read = false`;
/// the only mutation in its lifecycle is the recipient flipping `read` to
/// true. `read` is a single global flag, meaningful only from the
/// recipient's perspective (there is exactly one possible recipient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: DocumentId,
    pub sender_id: UserId,
    pub recipient_id: UserId,
    pub content: String,
    pub created_at: EventTime,
    pub read: bool,
}

impl Message {
    /// Create a new unread Message with a pending server timestamp
    pub fn new(id: DocumentId, sender_id: UserId, recipient_id: UserId, content: String) -> Self {
        Self {
            id,
            sender_id,
            recipient_id,
            content,
            created_at: EventTime::Pending,
            read: false,
        }
    }

    /// The conversation partner from `viewer`'s perspective
    pub fn other_party(&self, viewer: &UserId) -> &UserId {
        if self.sender_id == *viewer {
            &self.recipient_id
        } else {
            &self.sender_id
        }
    }

    /// True if `viewer` is the addressee of this message
    #[inline]
    pub fn is_addressed_to(&self, viewer: &UserId) -> bool {
        self.recipient_id == *viewer
    }

    /// True if this message shows as unread for `viewer`
    #[inline]
    pub fn is_unread_for(&self, viewer: &UserId) -> bool {
        self.is_addressed_to(viewer) && !self.read
    }

    /// Mark the message read
    pub fn mark_read(&mut self) {
        self.read = true;
    }

    /// Get a truncated preview of the message content
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
