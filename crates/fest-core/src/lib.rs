//! # fest-core
//!
//! Domain layer for the festival companion: entities, value objects, store
//! port traits, and the live-snapshot subscription primitive. This crate has
//! no dependency on any concrete datastore; infrastructure plugs in behind
//! the traits in [`traits`].

pub mod entities;
pub mod error;
pub mod subscription;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Message, Post, PostViewMarker, Reply, ReactionEvent, UserProfile};
pub use error::DomainError;
pub use subscription::{Snapshot, SnapshotSender, Subscription};
pub use traits::{
    MessageStore, PostStore, ProfileStore, ReactionStore, ReplyStore, StoreResult,
    ViewMarkerStore,
};
pub use value_objects::{DocumentId, DocumentIdGenerator, EventTime, PostId, UserId, INITIAL_GRANT};
