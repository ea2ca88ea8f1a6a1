//! Store port traits

mod stores;

pub use stores::{
    MessageStore, PostStore, ProfileStore, ReactionStore, ReplyStore, StoreResult,
    ViewMarkerStore,
};
