//! `MessageStore` implementation for [`MemoryStore`]

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fest_core::entities::Message;
use fest_core::traits::{MessageStore, StoreResult};
use fest_core::{DocumentId, EventTime, Subscription, UserId};

use super::MemoryStore;

fn involves(message: &Message, user_id: &UserId) -> bool {
    message.sender_id == *user_id || message.recipient_id == *user_id
}

fn between(message: &Message, a: &UserId, b: &UserId) -> bool {
    (message.sender_id == *a && message.recipient_id == *b)
        || (message.sender_id == *b && message.recipient_id == *a)
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Message>> {
        Ok(self.messages.get(id))
    }

    async fn find_involving(&self, user_id: &UserId) -> StoreResult<Vec<Message>> {
        let user_id = user_id.clone();
        Ok(self.messages.find(move |m| involves(m, &user_id)))
    }

    async fn find_between(&self, a: &UserId, b: &UserId) -> StoreResult<Vec<Message>> {
        Ok(self.messages.find(|m| between(m, a, b)))
    }

    async fn append(&self, message: &Message) -> StoreResult<Message> {
        let mut stored = message.clone();
        if stored.created_at.is_pending() {
            stored.created_at = EventTime::now();
        }
        debug!(
            collection = self.messages.name(),
            message_id = %stored.id,
            "appending message"
        );
        self.messages.insert(stored.id.clone(), stored.clone());
        Ok(stored)
    }

    async fn mark_read(&self, ids: &[DocumentId]) -> StoreResult<u64> {
        let flipped = self
            .messages
            .update_where(|m| !m.read && ids.contains(&m.id), Message::mark_read);
        debug!(collection = self.messages.name(), flipped, "marked messages read");
        Ok(flipped)
    }

    async fn delete(&self, id: &DocumentId) -> StoreResult<()> {
        let removed = self.messages.remove(id).is_some();
        debug!(collection = self.messages.name(), message_id = %id, removed, "deleted message");
        Ok(())
    }

    fn watch_involving(&self, user_id: &UserId) -> Subscription<Message> {
        let user_id = user_id.clone();
        self.messages.watch(Arc::new(move |m| involves(m, &user_id)))
    }

    fn watch_between(&self, a: &UserId, b: &UserId) -> Subscription<Message> {
        let a = a.clone();
        let b = b.clone();
        self.messages.watch(Arc::new(move |m| between(m, &a, &b)))
    }
}
