//! Test helpers for integration tests
//!
//! Wires every service port to one shared [`MemoryStore`] so the whole
//! stack runs in-process with real live subscriptions.

use std::sync::Arc;

use anyhow::Result;

use fest_common::try_init_tracing;
use fest_service::ServiceContext;
use fest_store::MemoryStore;

/// One store plus a service context wired to it
pub struct TestEnv {
    pub store: Arc<MemoryStore>,
    pub ctx: ServiceContext,
}

impl TestEnv {
    /// Set up an empty store with the default initial grant
    pub fn new() -> Result<Self> {
        Self::with_grant(fest_core::INITIAL_GRANT)
    }

    /// Set up an empty store with a custom initial grant
    pub fn with_grant(grant: i64) -> Result<Self> {
        // Best effort; only the first test in the process wins
        let _ = try_init_tracing();

        let store = Arc::new(MemoryStore::new());
        let ctx = ServiceContext::builder()
            .message_store(store.clone())
            .post_store(store.clone())
            .reply_store(store.clone())
            .view_marker_store(store.clone())
            .reaction_store(store.clone())
            .profile_store(store.clone())
            .initial_grant(grant)
            .build()
            .map_err(|e| anyhow::anyhow!("context build failed: {e}"))?;

        Ok(Self { store, ctx })
    }
}
