//! Value objects - identifiers, timestamps, and domain constants

mod event_time;
mod ids;

pub use event_time::EventTime;
pub use ids::{DocumentId, DocumentIdGenerator, PostId, UserId};

/// Starting balance granted to every user, in whole JENbucks.
///
/// The ledger never persists a balance row; the balance is always
/// `INITIAL_GRANT - spent + earned`, recomputed from the event log.
pub const INITIAL_GRANT: i64 = 500;
