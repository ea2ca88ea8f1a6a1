//! RSVP end-to-end tests

use anyhow::Result;

use fest_service::RsvpService;
use integration_tests::{fixtures, TestEnv};

#[tokio::test]
async fn test_toggle_round_trip() -> Result<()> {
    let env = TestEnv::new()?;
    let author = fixtures::unique_user();
    let guest = fixtures::unique_user();
    let rsvp = RsvpService::new(&env.ctx);

    let post = fixtures::post(&author);
    env.ctx.post_store().create(&post).await?;

    assert!(rsvp.toggle_attendance(Some(&guest), &post.id).await?);
    assert_eq!(rsvp.attendee_count(&post.id).await?, 1);

    // Second guest joins, first one backs out
    let other = fixtures::unique_user();
    assert!(rsvp.toggle_attendance(Some(&other), &post.id).await?);
    assert!(!rsvp.toggle_attendance(Some(&guest), &post.id).await?);
    assert_eq!(rsvp.attendee_count(&post.id).await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_toggle_requires_sign_in_and_a_real_post() -> Result<()> {
    let env = TestEnv::new()?;
    let author = fixtures::unique_user();
    let rsvp = RsvpService::new(&env.ctx);

    let post = fixtures::post(&author);
    env.ctx.post_store().create(&post).await?;

    let err = rsvp.toggle_attendance(None, &post.id).await.unwrap_err();
    assert_eq!(err.to_string(), "not signed in");

    let missing = fixtures::unique_post_id();
    let err = rsvp
        .toggle_attendance(Some(&author), &missing)
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_POST");
    Ok(())
}
