//! Inbox service - merged direct-message and reply-thread activity
//!
//! The inbox is one time-ordered list per viewer: the latest message per
//! conversation partner plus the latest reply on every post the viewer is
//! involved in, each entry carrying an unread flag. The whole list is a pure
//! function of four snapshots, recomputed in full on every change.

use std::collections::HashMap;

use tracing::{debug, info, instrument};

use fest_core::entities::{Message, Post, PostViewMarker, Reply};
use fest_core::{PostId, Snapshot, Subscription, UserId};

use crate::dto::InboxItem;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Characters of message content shown in the inbox entry
const PREVIEW_LEN: usize = 80;

/// The four snapshots the aggregation runs over
#[derive(Debug, Clone, Default)]
pub struct InboxSources {
    /// Messages where the viewer is sender or recipient
    pub messages: Vec<Message>,
    /// Published posts
    pub posts: Vec<Post>,
    /// All replies, across all posts
    pub replies: Vec<Reply>,
    /// The viewer's own view markers
    pub view_markers: Vec<PostViewMarker>,
}

/// Build the merged inbox for `viewer` from the given snapshots
///
/// Pure and idempotent: same snapshots in, same list out, no state carried
/// between calls. Entries are sorted newest-first by their representative
/// timestamp; entries whose timestamp is still pending sort last.
pub fn build_inbox(viewer: &UserId, sources: &InboxSources) -> Vec<InboxItem> {
    let mut items = Vec::new();

    // Latest message per conversation partner. On a timestamp tie the
    // earlier-seen message wins, so the result is stable across reruns.
    let mut latest_per_partner: HashMap<&UserId, &Message> = HashMap::new();
    for message in &sources.messages {
        if message.sender_id != *viewer && message.recipient_id != *viewer {
            continue;
        }
        let partner = message.other_party(viewer);
        match latest_per_partner.get(partner) {
            Some(current) if message.created_at <= current.created_at => {}
            _ => {
                latest_per_partner.insert(partner, message);
            }
        }
    }
    for (partner, message) in latest_per_partner {
        items.push(InboxItem::Message {
            other_user_id: partner.clone(),
            last_activity: message.created_at,
            preview: message.preview(PREVIEW_LEN).to_string(),
            sent_by_viewer: message.sender_id == *viewer,
            unread: message.is_unread_for(viewer),
        });
    }

    let mut replies_by_post: HashMap<&PostId, Vec<&Reply>> = HashMap::new();
    for reply in &sources.replies {
        replies_by_post.entry(&reply.post_id).or_default().push(reply);
    }
    let marker_for: HashMap<&PostId, &PostViewMarker> = sources
        .view_markers
        .iter()
        .filter(|m| m.user_id == *viewer)
        .map(|m| (&m.post_id, m))
        .collect();

    for post in &sources.posts {
        if !post.published {
            continue;
        }
        let replies = replies_by_post.get(&post.id).map_or(&[][..], Vec::as_slice);
        let owns_post = post.is_authored_by(viewer);
        let has_replied = replies.iter().any(|r| r.is_authored_by(viewer));
        if !owns_post && !has_replied {
            continue;
        }

        let has_new_replies = has_new_replies(viewer, marker_for.get(&post.id).copied(), replies);

        // An engagement-free own post would only clutter the inbox
        if owns_post && !has_new_replies && !has_replied {
            continue;
        }

        let last_activity = replies
            .iter()
            .map(|r| r.created_at)
            .max()
            .unwrap_or_default();

        items.push(InboxItem::PostReply {
            post_id: post.id.clone(),
            last_activity,
            unread: has_new_replies && owns_post,
            owns_post,
            has_replied,
        });
    }

    // Newest first, pending timestamps last; stable for equal timestamps
    items.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
    items
}

/// True if `replies` contains activity the viewer has not seen yet
///
/// With no view marker any reply from someone else counts, stamped or not.
/// With a marker only replies whose resolved time is strictly after the
/// marker count; a still-pending reply cannot beat an existing marker.
fn has_new_replies(
    viewer: &UserId,
    marker: Option<&PostViewMarker>,
    replies: &[&Reply],
) -> bool {
    replies.iter().any(|reply| {
        if reply.is_authored_by(viewer) {
            return false;
        }
        match marker {
            None => true,
            Some(marker) => reply
                .created_at
                .resolved()
                .is_some_and(|at| marker.is_before(at)),
        }
    })
}

/// Inbox service
pub struct InboxService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InboxService<'a> {
    /// Create a new InboxService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One-shot inbox computation from the stores' current state
    #[instrument(skip(self))]
    pub async fn inbox(&self, viewer: &UserId) -> ServiceResult<Vec<InboxItem>> {
        let sources = self.load_sources(viewer).await?;
        let items = build_inbox(viewer, &sources);
        debug!(viewer = %viewer, items = items.len(), "inbox built");
        Ok(items)
    }

    /// Unread badge count: unread DMs plus owned posts with new replies
    ///
    /// Deliberately narrower than the inbox list: a post the viewer merely
    /// replied to never increments the badge, only posts the viewer owns.
    #[instrument(skip(self))]
    pub async fn unread_count(&self, viewer: &UserId) -> ServiceResult<usize> {
        let sources = self.load_sources(viewer).await?;

        let unread_messages = sources
            .messages
            .iter()
            .filter(|m| m.is_unread_for(viewer))
            .count();

        let mut replies_by_post: HashMap<&PostId, Vec<&Reply>> = HashMap::new();
        for reply in &sources.replies {
            replies_by_post.entry(&reply.post_id).or_default().push(reply);
        }
        let marker_for: HashMap<&PostId, &PostViewMarker> = sources
            .view_markers
            .iter()
            .map(|m| (&m.post_id, m))
            .collect();

        let unread_posts = sources
            .posts
            .iter()
            .filter(|p| p.published && p.is_authored_by(viewer))
            .filter(|p| {
                let replies = replies_by_post.get(&p.id).map_or(&[][..], Vec::as_slice);
                has_new_replies(viewer, marker_for.get(&p.id).copied(), replies)
            })
            .count();

        Ok(unread_messages + unread_posts)
    }

    /// Record that the viewer opened a post's reply thread just now
    ///
    /// Create-or-replace by the `(viewer, post)` composite key; repeated
    /// views move the high-water mark forward, never duplicate it.
    #[instrument(skip(self))]
    pub async fn mark_post_viewed(&self, viewer: &UserId, post_id: &PostId) -> ServiceResult<()> {
        let marker = PostViewMarker::now(viewer.clone(), post_id.clone());
        self.ctx.view_marker_store().upsert(&marker).await?;
        info!(viewer = %viewer, post_id = %post_id, "post marked viewed");
        Ok(())
    }

    /// Live inbox: recomputed and pushed on every change to any source
    ///
    /// Each delivered snapshot is the full inbox list. The first one arrives
    /// once all four sources have reported their initial state. Dropping the
    /// subscription tears down the recompute task and with it all four
    /// upstream watchers; if any upstream lapses the subscription ends.
    pub fn watch_inbox(&self, viewer: &UserId) -> Subscription<InboxItem> {
        let mut messages = self.ctx.message_store().watch_involving(viewer);
        let mut posts = self.ctx.post_store().watch_published();
        let mut replies = self.ctx.reply_store().watch_all();
        let mut markers = self.ctx.view_marker_store().watch_for_user(viewer);

        let (tx, sub) = Subscription::channel();
        let viewer = viewer.clone();

        tokio::spawn(async move {
            let mut sources = InboxSources::default();
            let initial = (
                messages.next().await,
                posts.next().await,
                replies.next().await,
                markers.next().await,
            );
            let (Some(m), Some(p), Some(r), Some(v)) = initial else {
                return;
            };
            sources.messages = m.docs;
            sources.posts = p.docs;
            sources.replies = r.docs;
            sources.view_markers = v.docs;

            if !tx.send(Snapshot::new(build_inbox(&viewer, &sources))) {
                return;
            }

            loop {
                tokio::select! {
                    snap = messages.next() => match snap {
                        Some(s) => sources.messages = s.docs,
                        None => break,
                    },
                    snap = posts.next() => match snap {
                        Some(s) => sources.posts = s.docs,
                        None => break,
                    },
                    snap = replies.next() => match snap {
                        Some(s) => sources.replies = s.docs,
                        None => break,
                    },
                    snap = markers.next() => match snap {
                        Some(s) => sources.view_markers = s.docs,
                        None => break,
                    },
                }
                if !tx.send(Snapshot::new(build_inbox(&viewer, &sources))) {
                    break;
                }
            }
        });

        sub
    }

    async fn load_sources(&self, viewer: &UserId) -> ServiceResult<InboxSources> {
        Ok(InboxSources {
            messages: self.ctx.message_store().find_involving(viewer).await?,
            posts: self.ctx.post_store().find_published().await?,
            replies: self.ctx.reply_store().find_all().await?,
            view_markers: self.ctx.view_marker_store().find_for_user(viewer).await?,
        })
    }
}
