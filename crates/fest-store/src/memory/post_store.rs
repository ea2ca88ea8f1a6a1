//! `PostStore` implementation for [`MemoryStore`]

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fest_core::entities::Post;
use fest_core::error::DomainError;
use fest_core::traits::{PostStore, StoreResult};
use fest_core::{PostId, Subscription, UserId};

use super::MemoryStore;

impl MemoryStore {
    fn update_post(
        &self,
        post_id: &PostId,
        mutate: impl Fn(&mut Post),
    ) -> StoreResult<()> {
        let changed = self.posts.update_where(|p| p.id == *post_id, mutate);
        if changed == 0 {
            return Err(DomainError::PostNotFound(post_id.clone()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn find_by_id(&self, id: &PostId) -> StoreResult<Option<Post>> {
        Ok(self.posts.get(&Self::post_key(id)))
    }

    async fn find_published(&self) -> StoreResult<Vec<Post>> {
        Ok(self.posts.find(|p| p.published))
    }

    async fn create(&self, post: &Post) -> StoreResult<()> {
        debug!(collection = self.posts.name(), post_id = %post.id, "creating post");
        self.posts.insert(Self::post_key(&post.id), post.clone());
        Ok(())
    }

    async fn add_attendee(&self, post_id: &PostId, user_id: &UserId) -> StoreResult<()> {
        debug!(post_id = %post_id, user_id = %user_id, "adding attendee");
        self.update_post(post_id, |p| p.add_attendee(user_id.clone()))
    }

    async fn remove_attendee(&self, post_id: &PostId, user_id: &UserId) -> StoreResult<()> {
        debug!(post_id = %post_id, user_id = %user_id, "removing attendee");
        self.update_post(post_id, |p| p.remove_attendee(user_id))
    }

    fn watch_published(&self) -> Subscription<Post> {
        self.posts.watch(Arc::new(|p| p.published))
    }
}
