//! `ReplyStore` implementation for [`MemoryStore`]

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fest_core::entities::Reply;
use fest_core::traits::{ReplyStore, StoreResult};
use fest_core::{DocumentId, EventTime, PostId, Subscription};

use super::MemoryStore;

#[async_trait]
impl ReplyStore for MemoryStore {
    async fn find_all(&self) -> StoreResult<Vec<Reply>> {
        Ok(self.replies.find(|_| true))
    }

    async fn find_by_post(&self, post_id: &PostId) -> StoreResult<Vec<Reply>> {
        Ok(self.replies.find(|r| r.post_id == *post_id))
    }

    async fn append(&self, reply: &Reply) -> StoreResult<Reply> {
        let mut stored = reply.clone();
        if stored.created_at.is_pending() {
            stored.created_at = EventTime::now();
        }
        debug!(
            collection = self.replies.name(),
            reply_id = %stored.id,
            post_id = %stored.post_id,
            "appending reply"
        );
        self.replies.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: &DocumentId) -> StoreResult<()> {
        let removed = self.replies.remove(id).is_some();
        debug!(collection = self.replies.name(), reply_id = %id, removed, "deleted reply");
        Ok(())
    }

    fn watch_all(&self) -> Subscription<Reply> {
        self.replies.watch(Arc::new(|_| true))
    }
}
