//! `ViewMarkerStore` implementation for [`MemoryStore`]

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use fest_core::entities::PostViewMarker;
use fest_core::traits::{StoreResult, ViewMarkerStore};
use fest_core::{Subscription, UserId};

use super::MemoryStore;

#[async_trait]
impl ViewMarkerStore for MemoryStore {
    async fn find_for_user(&self, user_id: &UserId) -> StoreResult<Vec<PostViewMarker>> {
        Ok(self.view_markers.find(|m| m.user_id == *user_id))
    }

    async fn upsert(&self, marker: &PostViewMarker) -> StoreResult<()> {
        debug!(
            collection = self.view_markers.name(),
            user_id = %marker.user_id,
            post_id = %marker.post_id,
            "upserting view marker"
        );
        self.view_markers.upsert(marker.key(), marker.clone());
        Ok(())
    }

    fn watch_for_user(&self, user_id: &UserId) -> Subscription<PostViewMarker> {
        let user_id = user_id.clone();
        self.view_markers.watch(Arc::new(move |m| m.user_id == user_id))
    }
}
