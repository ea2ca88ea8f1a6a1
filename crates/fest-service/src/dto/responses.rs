//! Response DTOs
//!
//! Values derived by the services for rendering: the merged inbox list, the
//! JENbucks balance summary, and per-post reaction totals.

use serde::Serialize;

use fest_core::{EventTime, PostId, UserId};

/// One entry in the merged inbox
///
/// Either the most recent direct message exchanged with one partner, or the
/// most recent reply activity on a post the viewer is involved in. Ordered
/// newest-first in the list, entries without a resolved timestamp last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InboxItem {
    /// Latest direct message per conversation partner
    Message {
        other_user_id: UserId,
        last_activity: EventTime,
        preview: String,
        sent_by_viewer: bool,
        unread: bool,
    },
    /// Latest reply activity on an involved post
    PostReply {
        post_id: PostId,
        last_activity: EventTime,
        unread: bool,
        owns_post: bool,
        has_replied: bool,
    },
}

impl InboxItem {
    /// The representative timestamp this item sorts by
    pub fn last_activity(&self) -> EventTime {
        match self {
            Self::Message { last_activity, .. } | Self::PostReply { last_activity, .. } => {
                *last_activity
            }
        }
    }

    /// True if this entry should render an unread indicator
    pub fn is_unread(&self) -> bool {
        match self {
            Self::Message { unread, .. } | Self::PostReply { unread, .. } => *unread,
        }
    }
}

/// A user's JENbucks position
///
/// `balance = initial grant − spent + earned`, where `earned` already
/// excludes self-reactions. Note that the spend precondition is stricter
/// than the displayed balance: only the grant is spendable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BalanceSummary {
    pub balance: i64,
    pub spent: i64,
    pub earned: i64,
}

/// Reaction totals for one post as seen by one viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostReactionSummary {
    pub post_id: PostId,
    /// Bucks the post has received from everyone, self included
    pub total_received: i64,
    /// Bucks the viewer personally spent on this post
    pub spent_by_viewer: i64,
}
