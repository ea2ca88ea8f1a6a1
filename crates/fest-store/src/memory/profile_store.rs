//! `ProfileStore` implementation for [`MemoryStore`]

use async_trait::async_trait;
use tracing::debug;

use fest_core::entities::UserProfile;
use fest_core::traits::{ProfileStore, StoreResult};
use fest_core::UserId;

use super::MemoryStore;

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<UserProfile>> {
        Ok(self.profiles.get(&Self::profile_key(id)))
    }

    async fn find_all(&self) -> StoreResult<Vec<UserProfile>> {
        Ok(self.profiles.find(|_| true))
    }

    async fn upsert(&self, profile: &UserProfile) -> StoreResult<()> {
        debug!(collection = self.profiles.name(), user_id = %profile.id, "upserting profile");
        self.profiles
            .upsert(Self::profile_key(&profile.id), profile.clone());
        Ok(())
    }
}
