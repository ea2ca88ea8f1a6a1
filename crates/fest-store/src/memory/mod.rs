//! In-memory document store

mod backend;
mod collection;
mod message_store;
mod post_store;
mod profile_store;
mod reaction_store;
mod reply_store;
mod view_marker_store;

pub use backend::MemoryStore;
pub(crate) use collection::Collection;
