//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use fest_core::entities::{Post, Reply, UserProfile};
use fest_core::{DocumentId, PostId, UserId};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user id that is unique across the test process
pub fn unique_user() -> UserId {
    UserId::new(uuid::Uuid::new_v4().to_string())
}

/// A deterministic, readable user id for single-test scenarios
pub fn user(name: &str) -> UserId {
    UserId::new(name)
}

/// A fresh post id with a unique suffix
pub fn unique_post_id() -> PostId {
    PostId::new(format!("post{}", unique_suffix()))
}

/// A published post by `author`
pub fn post(author: &UserId) -> Post {
    Post::new(unique_post_id(), author.clone())
}

/// A reply to `post_id` by `author`, pending timestamp
pub fn reply(post_id: &PostId, author: &UserId, content: &str) -> Reply {
    Reply::new(
        DocumentId::new(format!("reply{}", unique_suffix())),
        post_id.clone(),
        author.clone(),
        content.to_string(),
    )
}

/// A profile with a display name set
pub fn profile(id: &UserId, display_name: &str) -> UserProfile {
    let mut p = UserProfile::new(id.clone());
    p.display_name = Some(display_name.to_string());
    p
}
