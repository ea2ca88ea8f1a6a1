//! Direct messaging end-to-end tests

use anyhow::Result;

use fest_service::dto::SendMessageRequest;
use fest_service::{MessagingService, ServiceError};
use integration_tests::{fixtures, TestEnv};

#[tokio::test]
async fn test_send_trims_and_stamps() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let messaging = MessagingService::new(&env.ctx);

    let sent = messaging
        .send_message(
            Some(&alice),
            &SendMessageRequest::new(bob.clone(), "  meet at the ferris wheel  "),
        )
        .await?;

    assert_eq!(sent.content, "meet at the ferris wheel");
    assert!(!sent.created_at.is_pending());
    assert!(!sent.read);
    Ok(())
}

#[tokio::test]
async fn test_send_rejections() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let messaging = MessagingService::new(&env.ctx);

    let err = messaging
        .send_message(None, &SendMessageRequest::new(bob.clone(), "hi"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not signed in");

    let err = messaging
        .send_message(Some(&alice), &SendMessageRequest::new(bob.clone(), "   "))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = messaging
        .send_message(
            Some(&alice),
            &SendMessageRequest::new(bob.clone(), "x".repeat(2001)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let err = messaging
        .send_message(Some(&alice), &SendMessageRequest::new(alice.clone(), "me"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));
    Ok(())
}

#[tokio::test]
async fn test_conversation_is_chronological_and_scoped() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let carol = fixtures::unique_user();
    let messaging = MessagingService::new(&env.ctx);

    messaging
        .send_message(Some(&alice), &SendMessageRequest::new(bob.clone(), "one"))
        .await?;
    messaging
        .send_message(Some(&bob), &SendMessageRequest::new(alice.clone(), "two"))
        .await?;
    messaging
        .send_message(Some(&alice), &SendMessageRequest::new(carol.clone(), "other thread"))
        .await?;

    let thread = messaging.conversation(&alice, &bob).await?;
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0].content, "one");
    assert_eq!(thread[1].content, "two");
    assert!(thread[0].created_at <= thread[1].created_at);
    Ok(())
}

#[tokio::test]
async fn test_mark_conversation_read_only_touches_that_partner() -> Result<()> {
    let env = TestEnv::new()?;
    let viewer = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let carol = fixtures::unique_user();
    let messaging = MessagingService::new(&env.ctx);

    messaging
        .send_message(Some(&bob), &SendMessageRequest::new(viewer.clone(), "from bob"))
        .await?;
    messaging
        .send_message(Some(&carol), &SendMessageRequest::new(viewer.clone(), "from carol"))
        .await?;
    // The viewer's own outgoing message must never be flipped
    messaging
        .send_message(Some(&viewer), &SendMessageRequest::new(bob.clone(), "to bob"))
        .await?;

    assert_eq!(messaging.mark_conversation_read(&viewer, &bob).await?, 1);
    // Idempotent on a second pass
    assert_eq!(messaging.mark_conversation_read(&viewer, &bob).await?, 0);

    // Carol's message is still unread
    let carol_thread = messaging.conversation(&viewer, &carol).await?;
    assert!(carol_thread[0].is_unread_for(&viewer));
    Ok(())
}

#[tokio::test]
async fn test_delete_is_sender_only() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let messaging = MessagingService::new(&env.ctx);

    let sent = messaging
        .send_message(Some(&alice), &SendMessageRequest::new(bob.clone(), "oops"))
        .await?;

    let err = messaging.delete_message(&bob, &sent.id).await.unwrap_err();
    assert_eq!(err.error_code(), "NOT_MESSAGE_SENDER");

    messaging.delete_message(&alice, &sent.id).await?;
    assert!(messaging.conversation(&alice, &bob).await?.is_empty());

    // Deleting again reports the message as gone
    let err = messaging.delete_message(&alice, &sent.id).await.unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_MESSAGE");
    Ok(())
}

#[tokio::test]
async fn test_watch_conversation_delivers_sorted_snapshots() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let messaging = MessagingService::new(&env.ctx);

    let mut sub = messaging.watch_conversation(&alice, &bob);
    assert!(sub.next().await.expect("initial").is_empty());

    messaging
        .send_message(Some(&alice), &SendMessageRequest::new(bob.clone(), "first"))
        .await?;
    messaging
        .send_message(Some(&bob), &SendMessageRequest::new(alice.clone(), "second"))
        .await?;

    let _ = sub.next().await.expect("after first");
    let snap = sub.next().await.expect("after second");
    assert_eq!(snap.len(), 2);
    assert_eq!(snap.docs[0].content, "first");
    assert_eq!(snap.docs[1].content, "second");
    Ok(())
}
