//! Messaging service - direct messages between two users
//!
//! Conversations are chronological (oldest first), with still-pending
//! timestamps at the end. Read state is a single flag per message, flipped
//! in batch when the recipient opens the conversation.

use tracing::{info, instrument};
use validator::Validate;

use fest_core::entities::Message;
use fest_core::{DocumentId, DomainError, Snapshot, Subscription, UserId};

use crate::dto::SendMessageRequest;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Messaging service
pub struct MessagingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessagingService<'a> {
    /// Create a new MessagingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a direct message
    ///
    /// Requires sign-in and non-empty content after trimming; appended
    /// unread with a pending creation time for the store to stamp.
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        sender: Option<&UserId>,
        request: &SendMessageRequest,
    ) -> ServiceResult<Message> {
        let sender = sender.ok_or(DomainError::NotSignedIn)?;
        request.validate()?;

        let content = request.content.trim();
        if content.is_empty() {
            return Err(ServiceError::validation("Message is empty"));
        }
        if *sender == request.recipient_id {
            return Err(ServiceError::validation("Cannot message yourself"));
        }

        let message = Message::new(
            self.ctx.generate_id(),
            sender.clone(),
            request.recipient_id.clone(),
            content.to_string(),
        );
        let stored = self.ctx.message_store().append(&message).await?;

        info!(
            message_id = %stored.id,
            sender = %sender,
            recipient = %request.recipient_id,
            "message sent"
        );
        Ok(stored)
    }

    /// Full conversation between two users, oldest first
    #[instrument(skip(self))]
    pub async fn conversation(
        &self,
        viewer: &UserId,
        other: &UserId,
    ) -> ServiceResult<Vec<Message>> {
        let mut messages = self.ctx.message_store().find_between(viewer, other).await?;
        messages.sort_by(|a, b| a.created_at.cmp_oldest_first(&b.created_at));
        Ok(messages)
    }

    /// Flip `read` on every unread message from `other` addressed to
    /// `viewer`, returning how many were flipped
    #[instrument(skip(self))]
    pub async fn mark_conversation_read(
        &self,
        viewer: &UserId,
        other: &UserId,
    ) -> ServiceResult<u64> {
        let unread_ids: Vec<DocumentId> = self
            .ctx
            .message_store()
            .find_between(viewer, other)
            .await?
            .into_iter()
            .filter(|m| m.sender_id == *other && m.is_unread_for(viewer))
            .map(|m| m.id)
            .collect();

        if unread_ids.is_empty() {
            return Ok(0);
        }
        let flipped = self.ctx.message_store().mark_read(&unread_ids).await?;
        info!(viewer = %viewer, other = %other, flipped, "conversation marked read");
        Ok(flipped)
    }

    /// Sender-only explicit delete
    #[instrument(skip(self))]
    pub async fn delete_message(
        &self,
        actor: &UserId,
        message_id: &DocumentId,
    ) -> ServiceResult<()> {
        let message = self
            .ctx
            .message_store()
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| DomainError::MessageNotFound(message_id.clone()))?;

        if message.sender_id != *actor {
            return Err(DomainError::NotMessageSender.into());
        }

        self.ctx.message_store().delete(message_id).await?;
        info!(message_id = %message_id, actor = %actor, "message deleted");
        Ok(())
    }

    /// Live conversation view, each snapshot sorted oldest first
    ///
    /// Dropping the subscription tears down the sorting task and its
    /// upstream watcher.
    pub fn watch_conversation(&self, viewer: &UserId, other: &UserId) -> Subscription<Message> {
        let mut upstream = self.ctx.message_store().watch_between(viewer, other);
        let (tx, sub) = Subscription::channel();

        tokio::spawn(async move {
            while let Some(mut snap) = upstream.next().await {
                snap.docs
                    .sort_by(|a, b| a.created_at.cmp_oldest_first(&b.created_at));
                if !tx.send(Snapshot::new(snap.docs)) {
                    break;
                }
            }
        });

        sub
    }
}
