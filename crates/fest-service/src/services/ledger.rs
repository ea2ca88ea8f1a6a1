//! Ledger service - the JENbucks virtual-currency engine
//!
//! Every position is recomputed from the append-only reaction event log;
//! there is no mutable counter anywhere, so the balance can never suffer a
//! lost update. Spending is capped by the initial grant minus what has
//! already been spent; earned bucks are displayed but not spendable.

use tracing::{info, instrument};

use fest_core::entities::ReactionEvent;
use fest_core::{DomainError, PostId, Snapshot, Subscription, UserId};

use crate::dto::{BalanceSummary, PostReactionSummary};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Compute a user's position from the full event log
///
/// `spent` counts events the user authored as spender; `earned` counts
/// events received on the user's posts from other people. Self-reactions
/// cost a buck but earn nothing.
pub fn summarize(events: &[ReactionEvent], user: &UserId, initial_grant: i64) -> BalanceSummary {
    let spent: i64 = events
        .iter()
        .filter(|e| e.user_id == *user)
        .map(|e| e.amount)
        .sum();
    let earned: i64 = events
        .iter()
        .filter(|e| e.author_id == *user && !e.is_self_reaction())
        .map(|e| e.amount)
        .sum();
    BalanceSummary {
        balance: initial_grant - spent + earned,
        spent,
        earned,
    }
}

/// Ledger service
pub struct LedgerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LedgerService<'a> {
    /// Create a new LedgerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current position of `user`, recomputed from the full event log
    #[instrument(skip(self))]
    pub async fn balance(&self, user: &UserId) -> ServiceResult<BalanceSummary> {
        let events = self.ctx.reaction_store().find_all().await?;
        Ok(summarize(&events, user, self.ctx.initial_grant()))
    }

    /// Reaction totals for one post as seen by `viewer`
    #[instrument(skip(self))]
    pub async fn post_reactions(
        &self,
        viewer: &UserId,
        post_id: &PostId,
    ) -> ServiceResult<PostReactionSummary> {
        let events = self.ctx.reaction_store().find_by_post(post_id).await?;
        let total_received: i64 = events.iter().map(|e| e.amount).sum();
        let spent_by_viewer: i64 = events
            .iter()
            .filter(|e| e.user_id == *viewer)
            .map(|e| e.amount)
            .sum();
        Ok(PostReactionSummary {
            post_id: post_id.clone(),
            total_received,
            spent_by_viewer,
        })
    }

    /// Bucks `viewer` personally spent on one post
    pub async fn spent_on_post(&self, viewer: &UserId, post_id: &PostId) -> ServiceResult<i64> {
        Ok(self.post_reactions(viewer, post_id).await?.spent_by_viewer)
    }

    /// Spend one buck on a post
    ///
    /// Rejected for anonymous callers and for callers whose grant is used
    /// up. The ceiling deliberately ignores earned income: a user spends
    /// only against `initial grant − spent`, however much they have earned.
    /// There is no per-post cap. On success exactly one event is appended
    /// with a pending creation time for the store to stamp.
    #[instrument(skip(self))]
    pub async fn add_reaction(
        &self,
        viewer: Option<&UserId>,
        post_id: &PostId,
        author_id: &UserId,
    ) -> ServiceResult<ReactionEvent> {
        let viewer = viewer.ok_or(DomainError::NotSignedIn)?;

        let spent: i64 = self
            .ctx
            .reaction_store()
            .find_by_spender(viewer)
            .await?
            .iter()
            .map(|e| e.amount)
            .sum();
        if self.ctx.initial_grant() - spent <= 0 {
            return Err(DomainError::NoFundsLeft.into());
        }

        let event = ReactionEvent::new(
            self.ctx.generate_id(),
            post_id.clone(),
            viewer.clone(),
            author_id.clone(),
        );
        let stored = self.ctx.reaction_store().append(&event).await?;

        info!(
            event_id = %stored.id,
            post_id = %post_id,
            spender = %viewer,
            author = %author_id,
            "reaction appended"
        );
        Ok(stored)
    }

    /// Live balance: a fresh summary on every change to the event log
    ///
    /// Each snapshot carries exactly one [`BalanceSummary`]. Dropping the
    /// subscription tears down the recompute task and its upstream watcher.
    pub fn watch_balance(&self, user: &UserId) -> Subscription<BalanceSummary> {
        let mut events = self.ctx.reaction_store().watch_all();
        let (tx, sub) = Subscription::channel();
        let user = user.clone();
        let initial_grant = self.ctx.initial_grant();

        tokio::spawn(async move {
            while let Some(snap) = events.next().await {
                let summary = summarize(&snap.docs, &user, initial_grant);
                if !tx.send(Snapshot::new(vec![summary])) {
                    break;
                }
            }
        });

        sub
    }
}
