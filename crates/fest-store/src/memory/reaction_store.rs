//! `ReactionStore` implementation for [`MemoryStore`]

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fest_core::entities::ReactionEvent;
use fest_core::traits::{ReactionStore, StoreResult};
use fest_core::{EventTime, PostId, Subscription, UserId};

use super::MemoryStore;

#[async_trait]
impl ReactionStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<ReactionEvent>> {
        Ok(self.reactions.find(|_| true))
    }

    async fn find_by_spender(&self, user_id: &UserId) -> StoreResult<Vec<ReactionEvent>> {
        Ok(self.reactions.find(|e| e.user_id == *user_id))
    }

    async fn find_by_recipient(&self, author_id: &UserId) -> StoreResult<Vec<ReactionEvent>> {
        Ok(self.reactions.find(|e| e.author_id == *author_id))
    }

    async fn find_by_post(&self, post_id: &PostId) -> StoreResult<Vec<ReactionEvent>> {
        Ok(self.reactions.find(|e| e.post_id == *post_id))
    }

    async fn append(&self, event: &ReactionEvent) -> StoreResult<ReactionEvent> {
        let mut stored = event.clone();
        if stored.created_at.is_pending() {
            stored.created_at = EventTime::now();
        }
        debug!(
            collection = self.reactions.name(),
            event_id = %stored.id,
            post_id = %stored.post_id,
            spender = %stored.user_id,
            "appending reaction event"
        );
        self.reactions.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    fn watch_all(&self) -> Subscription<ReactionEvent> {
        self.reactions.watch(Arc::new(|_| true))
    }

    fn watch_by_spender(&self, user_id: &UserId) -> Subscription<ReactionEvent> {
        let user_id = user_id.clone();
        self.reactions.watch(Arc::new(move |e| e.user_id == user_id))
    }

    fn watch_by_recipient(&self, author_id: &UserId) -> Subscription<ReactionEvent> {
        let author_id = author_id.clone();
        self.reactions.watch(Arc::new(move |e| e.author_id == author_id))
    }
}
