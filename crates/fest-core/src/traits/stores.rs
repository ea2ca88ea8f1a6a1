//! Store traits (ports) - the interface this core expects from the document store
//!
//! The domain layer defines what it needs from the hosted document database;
//! the infrastructure layer provides the implementation. Every trait exposes
//! one-shot queries, single-document writes (each assumed atomic by the
//! underlying store; no cross-collection transactions), and `watch_*`
//! methods returning a [`Subscription`] that delivers a full snapshot
//! immediately and after every subsequent change.

use async_trait::async_trait;

use crate::entities::{Message, Post, PostViewMarker, ReactionEvent, Reply, UserProfile};
use crate::error::DomainError;
use crate::subscription::Subscription;
use crate::value_objects::{DocumentId, PostId, UserId};

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

// ============================================================================
// Message Store
// ============================================================================

#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Find message by ID
    async fn find_by_id(&self, id: &DocumentId) -> StoreResult<Option<Message>>;

    /// All messages where `user_id` is sender or recipient
    async fn find_involving(&self, user_id: &UserId) -> StoreResult<Vec<Message>>;

    /// All messages between two users, in both directions
    async fn find_between(&self, a: &UserId, b: &UserId) -> StoreResult<Vec<Message>>;

    /// Append a new message; the store stamps the creation time and returns
    /// the stored document
    async fn append(&self, message: &Message) -> StoreResult<Message>;

    /// Batch-update `read = true` on the given messages, returning the
    /// number actually flipped
    async fn mark_read(&self, ids: &[DocumentId]) -> StoreResult<u64>;

    /// Explicit owner delete
    async fn delete(&self, id: &DocumentId) -> StoreResult<()>;

    /// Live view of all messages involving `user_id`
    fn watch_involving(&self, user_id: &UserId) -> Subscription<Message>;

    /// Live view of the conversation between two users
    fn watch_between(&self, a: &UserId, b: &UserId) -> Subscription<Message>;
}

// ============================================================================
// Post Store
// ============================================================================

#[async_trait]
pub trait PostStore: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: &PostId) -> StoreResult<Option<Post>>;

    /// All posts that are not unpublished (`published != false`)
    async fn find_published(&self) -> StoreResult<Vec<Post>>;

    /// Create a new post document
    async fn create(&self, post: &Post) -> StoreResult<()>;

    /// Array-union `user_id` into the post's attendee list
    async fn add_attendee(&self, post_id: &PostId, user_id: &UserId) -> StoreResult<()>;

    /// Array-remove `user_id` from the post's attendee list
    async fn remove_attendee(&self, post_id: &PostId, user_id: &UserId) -> StoreResult<()>;

    /// Live view of published posts
    fn watch_published(&self) -> Subscription<Post>;
}

// ============================================================================
// Reply Store
// ============================================================================

#[async_trait]
pub trait ReplyStore: Send + Sync {
    /// All replies across all posts
    async fn find_all(&self) -> StoreResult<Vec<Reply>>;

    /// Replies belonging to one post
    async fn find_by_post(&self, post_id: &PostId) -> StoreResult<Vec<Reply>>;

    /// Append a new reply; the store stamps the creation time and returns
    /// the stored document
    async fn append(&self, reply: &Reply) -> StoreResult<Reply>;

    /// Explicit delete
    async fn delete(&self, id: &DocumentId) -> StoreResult<()>;

    /// Live view of all replies
    fn watch_all(&self) -> Subscription<Reply>;
}

// ============================================================================
// View Marker Store
// ============================================================================

#[async_trait]
pub trait ViewMarkerStore: Send + Sync {
    /// All of one user's view markers
    async fn find_for_user(&self, user_id: &UserId) -> StoreResult<Vec<PostViewMarker>>;

    /// Create-or-replace by the marker's composite `(user, post)` key;
    /// never inserts a duplicate for a pair
    async fn upsert(&self, marker: &PostViewMarker) -> StoreResult<()>;

    /// Live view of one user's markers
    fn watch_for_user(&self, user_id: &UserId) -> Subscription<PostViewMarker>;
}

// ============================================================================
// Reaction Store
// ============================================================================

#[async_trait]
pub trait ReactionStore: Send + Sync {
    /// The full reaction event log
    async fn find_all(&self) -> StoreResult<Vec<ReactionEvent>>;

    /// Events where `user_id` is the spender
    async fn find_by_spender(&self, user_id: &UserId) -> StoreResult<Vec<ReactionEvent>>;

    /// Events where `author_id` is the receiving post author
    async fn find_by_recipient(&self, author_id: &UserId) -> StoreResult<Vec<ReactionEvent>>;

    /// Events attached to one post
    async fn find_by_post(&self, post_id: &PostId) -> StoreResult<Vec<ReactionEvent>>;

    /// Append one event to the log; the store stamps the creation time and
    /// returns the stored document. Events are never mutated or deleted.
    async fn append(&self, event: &ReactionEvent) -> StoreResult<ReactionEvent>;

    /// Live view of the whole event log
    fn watch_all(&self) -> Subscription<ReactionEvent>;

    /// Live view of one spender's events
    fn watch_by_spender(&self, user_id: &UserId) -> Subscription<ReactionEvent>;

    /// Live view of events received by one author
    fn watch_by_recipient(&self, author_id: &UserId) -> Subscription<ReactionEvent>;
}

// ============================================================================
// Profile Store
// ============================================================================

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Find profile by user ID
    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<UserProfile>>;

    /// All known profiles
    async fn find_all(&self) -> StoreResult<Vec<UserProfile>>;

    /// Create-or-replace a profile keyed by its user ID
    async fn upsert(&self, profile: &UserProfile) -> StoreResult<()>;
}
