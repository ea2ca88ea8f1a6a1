//! Event creation time, pending or resolved
//!
//! Documents are created with a server-assigned timestamp. Between the local
//! append and the server acknowledging it, the creation time is unknown. The
//! original behavior treats such a missing timestamp as older than any
//! resolved one, so freshly appended documents sort last in newest-first
//! lists. `EventTime` makes that rule part of the type's ordering instead of
//! a null check repeated in every comparator.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Creation time of a stored document
///
/// `Pending` orders before every resolved instant, so the maximum of a set of
/// `EventTime`s is the most recent resolved time whenever one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<DateTime<Utc>>", into = "Option<DateTime<Utc>>")]
pub enum EventTime {
    /// Server timestamp not yet assigned
    Pending,
    /// Resolved server timestamp
    At(DateTime<Utc>),
}

impl EventTime {
    /// The current wall-clock time as a resolved event time
    pub fn now() -> Self {
        Self::At(Utc::now())
    }

    /// True if the server has not stamped this document yet
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// The resolved instant, if any
    #[inline]
    pub fn resolved(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Pending => None,
            Self::At(t) => Some(*t),
        }
    }

    /// Oldest-first comparison with pending times ordered last
    ///
    /// The derived [`Ord`] puts `Pending` first, which is right for
    /// newest-first lists (reverse comparison). Chronological conversation
    /// views want ascending resolved times but still push unstamped
    /// documents to the end; this comparator encodes that.
    pub fn cmp_oldest_first(&self, other: &Self) -> Ordering {
        match (self.resolved(), other.resolved()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }
}

impl Default for EventTime {
    fn default() -> Self {
        Self::Pending
    }
}

impl From<DateTime<Utc>> for EventTime {
    fn from(t: DateTime<Utc>) -> Self {
        Self::At(t)
    }
}

impl From<Option<DateTime<Utc>>> for EventTime {
    fn from(t: Option<DateTime<Utc>>) -> Self {
        t.map_or(Self::Pending, Self::At)
    }
}

impl From<EventTime> for Option<DateTime<Utc>> {
    fn from(t: EventTime) -> Self {
        t.resolved()
    }
}
