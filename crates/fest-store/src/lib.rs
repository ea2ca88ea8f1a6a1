//! # fest-store
//!
//! Infrastructure layer: an in-process document store implementing the port
//! traits from `fest-core`. Collections hold plain documents and push a full
//! snapshot to every registered watcher after each mutation, mirroring the
//! hosted store's live-query behavior. Useful both as the test double for
//! the services and as the storage backend for single-process deployments.

pub mod memory;

pub use memory::MemoryStore;
