//! Service context - dependency container for services
//!
//! Holds the store ports, the id generator, and ledger configuration that
//! every service needs.

use std::sync::Arc;

use fest_common::config::LedgerConfig;
use fest_core::traits::{
    MessageStore, PostStore, ProfileStore, ReactionStore, ReplyStore, ViewMarkerStore,
};
use fest_core::{DocumentIdGenerator, INITIAL_GRANT};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Store ports (document collections with live subscriptions)
/// - Document id generator
/// - Ledger configuration (initial grant)
#[derive(Clone)]
pub struct ServiceContext {
    // Store ports
    message_store: Arc<dyn MessageStore>,
    post_store: Arc<dyn PostStore>,
    reply_store: Arc<dyn ReplyStore>,
    view_marker_store: Arc<dyn ViewMarkerStore>,
    reaction_store: Arc<dyn ReactionStore>,
    profile_store: Arc<dyn ProfileStore>,

    // Id generation
    id_generator: Arc<DocumentIdGenerator>,

    // Ledger
    initial_grant: i64,
}

impl ServiceContext {
    /// Create a builder for the context
    #[must_use]
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Store Ports ===

    /// Get the message store
    pub fn message_store(&self) -> &dyn MessageStore {
        self.message_store.as_ref()
    }

    /// Get the post store
    pub fn post_store(&self) -> &dyn PostStore {
        self.post_store.as_ref()
    }

    /// Get the reply store
    pub fn reply_store(&self) -> &dyn ReplyStore {
        self.reply_store.as_ref()
    }

    /// Get the view marker store
    pub fn view_marker_store(&self) -> &dyn ViewMarkerStore {
        self.view_marker_store.as_ref()
    }

    /// Get the reaction store
    pub fn reaction_store(&self) -> &dyn ReactionStore {
        self.reaction_store.as_ref()
    }

    /// Get the profile store
    pub fn profile_store(&self) -> &dyn ProfileStore {
        self.profile_store.as_ref()
    }

    // === Id Generation ===

    /// Get the document id generator
    pub fn id_generator(&self) -> &DocumentIdGenerator {
        self.id_generator.as_ref()
    }

    /// Generate a new document id
    pub fn generate_id(&self) -> fest_core::DocumentId {
        self.id_generator.generate()
    }

    // === Ledger ===

    /// Starting balance granted to every user
    pub fn initial_grant(&self) -> i64 {
        self.initial_grant
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .field("initial_grant", &self.initial_grant)
            .finish()
    }
}

/// Builder for [`ServiceContext`]
pub struct ServiceContextBuilder {
    message_store: Option<Arc<dyn MessageStore>>,
    post_store: Option<Arc<dyn PostStore>>,
    reply_store: Option<Arc<dyn ReplyStore>>,
    view_marker_store: Option<Arc<dyn ViewMarkerStore>>,
    reaction_store: Option<Arc<dyn ReactionStore>>,
    profile_store: Option<Arc<dyn ProfileStore>>,
    id_generator: Option<Arc<DocumentIdGenerator>>,
    initial_grant: i64,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            message_store: None,
            post_store: None,
            reply_store: None,
            view_marker_store: None,
            reaction_store: None,
            profile_store: None,
            id_generator: None,
            initial_grant: INITIAL_GRANT,
        }
    }

    #[must_use]
    pub fn message_store(mut self, store: Arc<dyn MessageStore>) -> Self {
        self.message_store = Some(store);
        self
    }

    #[must_use]
    pub fn post_store(mut self, store: Arc<dyn PostStore>) -> Self {
        self.post_store = Some(store);
        self
    }

    #[must_use]
    pub fn reply_store(mut self, store: Arc<dyn ReplyStore>) -> Self {
        self.reply_store = Some(store);
        self
    }

    #[must_use]
    pub fn view_marker_store(mut self, store: Arc<dyn ViewMarkerStore>) -> Self {
        self.view_marker_store = Some(store);
        self
    }

    #[must_use]
    pub fn reaction_store(mut self, store: Arc<dyn ReactionStore>) -> Self {
        self.reaction_store = Some(store);
        self
    }

    #[must_use]
    pub fn profile_store(mut self, store: Arc<dyn ProfileStore>) -> Self {
        self.profile_store = Some(store);
        self
    }

    #[must_use]
    pub fn id_generator(mut self, generator: Arc<DocumentIdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Override the initial grant directly
    #[must_use]
    pub fn initial_grant(mut self, grant: i64) -> Self {
        self.initial_grant = grant;
        self
    }

    /// Take the initial grant from loaded configuration
    #[must_use]
    pub fn ledger_config(mut self, config: &LedgerConfig) -> Self {
        self.initial_grant = config.initial_grant;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            message_store: self
                .message_store
                .ok_or_else(|| ServiceError::validation("message_store is required"))?,
            post_store: self
                .post_store
                .ok_or_else(|| ServiceError::validation("post_store is required"))?,
            reply_store: self
                .reply_store
                .ok_or_else(|| ServiceError::validation("reply_store is required"))?,
            view_marker_store: self
                .view_marker_store
                .ok_or_else(|| ServiceError::validation("view_marker_store is required"))?,
            reaction_store: self
                .reaction_store
                .ok_or_else(|| ServiceError::validation("reaction_store is required"))?,
            profile_store: self
                .profile_store
                .ok_or_else(|| ServiceError::validation("profile_store is required"))?,
            id_generator: self.id_generator.unwrap_or_default(),
            initial_grant: self.initial_grant,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
