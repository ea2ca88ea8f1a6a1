//! Inbox aggregation end-to-end tests
//!
//! Run the full stack: services over the in-process store with live
//! subscriptions.

use anyhow::Result;

use fest_service::dto::{InboxItem, SendMessageRequest};
use fest_service::{InboxService, MessagingService};
use integration_tests::{fixtures, TestEnv};

#[tokio::test]
async fn test_inbox_merges_messages_and_post_activity() -> Result<()> {
    let env = TestEnv::new()?;
    let viewer = fixtures::unique_user();
    let friend = fixtures::unique_user();

    // A DM from the friend
    let messaging = MessagingService::new(&env.ctx);
    messaging
        .send_message(
            Some(&friend),
            &SendMessageRequest::new(viewer.clone(), "are you at the gate?"),
        )
        .await?;

    // A post the viewer owns with a reply from the friend
    let post = fixtures::post(&viewer);
    env.ctx.post_store().create(&post).await?;
    env.ctx
        .reply_store()
        .append(&fixtures::reply(&post.id, &friend, "count me in"))
        .await?;

    let inbox = InboxService::new(&env.ctx).inbox(&viewer).await?;
    assert_eq!(inbox.len(), 2);
    assert!(inbox.iter().all(InboxItem::is_unread));

    // Newest activity first: the reply arrived after the message
    assert!(matches!(inbox[0], InboxItem::PostReply { .. }));
    assert!(matches!(inbox[1], InboxItem::Message { .. }));

    // Items serialize with their kind tag for the rendering layer
    let json = serde_json::to_value(&inbox)?;
    assert_eq!(json[0]["kind"], "post-reply");
    assert_eq!(json[1]["kind"], "message");
    Ok(())
}

#[tokio::test]
async fn test_own_post_without_engagement_stays_out_of_inbox() -> Result<()> {
    let env = TestEnv::new()?;
    let viewer = fixtures::unique_user();

    let post = fixtures::post(&viewer);
    env.ctx.post_store().create(&post).await?;

    let inbox = InboxService::new(&env.ctx).inbox(&viewer).await?;
    assert!(inbox.is_empty());

    // The author replying to their own post makes it appear, not unread
    env.ctx
        .reply_store()
        .append(&fixtures::reply(&post.id, &viewer, "bumping this"))
        .await?;
    let inbox = InboxService::new(&env.ctx).inbox(&viewer).await?;
    assert_eq!(inbox.len(), 1);
    assert!(!inbox[0].is_unread());
    Ok(())
}

#[tokio::test]
async fn test_viewing_a_post_clears_its_unread_state() -> Result<()> {
    let env = TestEnv::new()?;
    let viewer = fixtures::unique_user();
    let friend = fixtures::unique_user();
    let service = InboxService::new(&env.ctx);

    let post = fixtures::post(&viewer);
    env.ctx.post_store().create(&post).await?;
    env.ctx
        .reply_store()
        .append(&fixtures::reply(&post.id, &friend, "see you there"))
        .await?;

    assert_eq!(service.unread_count(&viewer).await?, 1);

    service.mark_post_viewed(&viewer, &post.id).await?;
    assert_eq!(service.unread_count(&viewer).await?, 0);

    // The post drops out entirely: seen, and the viewer never replied
    assert!(service.inbox(&viewer).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_unread_badge_ignores_posts_viewer_merely_replied_to() -> Result<()> {
    let env = TestEnv::new()?;
    let viewer = fixtures::unique_user();
    let author = fixtures::unique_user();
    let service = InboxService::new(&env.ctx);

    let post = fixtures::post(&author);
    env.ctx.post_store().create(&post).await?;
    env.ctx
        .reply_store()
        .append(&fixtures::reply(&post.id, &viewer, "looks fun"))
        .await?;
    env.ctx
        .reply_store()
        .append(&fixtures::reply(&post.id, &author, "it will be"))
        .await?;

    // Listed in the inbox, but the badge counts owned posts only
    assert_eq!(service.inbox(&viewer).await?.len(), 1);
    assert_eq!(service.unread_count(&viewer).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_partner_profiles_resolve_for_rendering() -> Result<()> {
    let env = TestEnv::new()?;
    let friend = fixtures::unique_user();
    let stranger = fixtures::unique_user();

    env.ctx
        .profile_store()
        .upsert(&fixtures::profile(&friend, "Jen"))
        .await?;

    let found = env.ctx.profile_store().find_by_id(&friend).await?.unwrap();
    assert_eq!(found.display_name_or_default(), "Jen");

    // Unknown partners fall back to the anonymous label
    assert!(env.ctx.profile_store().find_by_id(&stranger).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_watch_inbox_recomputes_on_every_source_change() -> Result<()> {
    let env = TestEnv::new()?;
    let viewer = fixtures::unique_user();
    let friend = fixtures::unique_user();
    let service = InboxService::new(&env.ctx);

    let mut sub = service.watch_inbox(&viewer);
    let initial = sub.next().await.expect("initial snapshot");
    assert!(initial.is_empty());

    // New DM -> one recompute
    MessagingService::new(&env.ctx)
        .send_message(
            Some(&friend),
            &SendMessageRequest::new(viewer.clone(), "hey"),
        )
        .await?;
    let snap = sub.next().await.expect("after message");
    assert_eq!(snap.len(), 1);
    assert!(snap.docs[0].is_unread());

    // New reply on an owned post -> two recomputes (post, then reply)
    let post = fixtures::post(&viewer);
    env.ctx.post_store().create(&post).await?;
    let _ = sub.next().await.expect("after post create");
    env.ctx
        .reply_store()
        .append(&fixtures::reply(&post.id, &friend, "saved you a spot"))
        .await?;
    let snap = sub.next().await.expect("after reply");
    assert_eq!(snap.len(), 2);

    // Marking the post viewed flips it back out of the list
    service.mark_post_viewed(&viewer, &post.id).await?;
    let snap = sub.next().await.expect("after view marker");
    assert_eq!(snap.len(), 1);
    Ok(())
}
