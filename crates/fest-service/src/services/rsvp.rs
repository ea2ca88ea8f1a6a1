//! RSVP service - attendance toggling on posts
//!
//! Attendance is one array on the post document, mutated with array-union /
//! array-remove semantics so repeated toggles never duplicate an entry.

use tracing::{info, instrument};

use fest_core::{DomainError, PostId, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// RSVP service
pub struct RsvpService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RsvpService<'a> {
    /// Create a new RsvpService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the caller's attendance on a post
    ///
    /// Returns true if the caller is attending after the toggle. Requires
    /// sign-in.
    #[instrument(skip(self))]
    pub async fn toggle_attendance(
        &self,
        user: Option<&UserId>,
        post_id: &PostId,
    ) -> ServiceResult<bool> {
        let user = user.ok_or(DomainError::NotSignedIn)?;

        let post = self
            .ctx
            .post_store()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id.clone()))?;

        let attending = if post.is_attending(user) {
            self.ctx.post_store().remove_attendee(post_id, user).await?;
            false
        } else {
            self.ctx.post_store().add_attendee(post_id, user).await?;
            true
        };

        info!(post_id = %post_id, user = %user, attending, "attendance toggled");
        Ok(attending)
    }

    /// Number of users currently attending a post's event
    #[instrument(skip(self))]
    pub async fn attendee_count(&self, post_id: &PostId) -> ServiceResult<usize> {
        let post = self
            .ctx
            .post_store()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id.clone()))?;
        Ok(post.attendees.len())
    }
}
