//! JENbucks ledger end-to-end tests

use anyhow::Result;

use fest_service::{LedgerService, ServiceError};
use integration_tests::{fixtures, TestEnv};

#[tokio::test]
async fn test_spending_and_earning_move_the_balance() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let ledger = LedgerService::new(&env.ctx);

    let post = fixtures::post(&bob);
    env.ctx.post_store().create(&post).await?;

    ledger.add_reaction(Some(&alice), &post.id, &bob).await?;
    ledger.add_reaction(Some(&alice), &post.id, &bob).await?;

    let alice_summary = ledger.balance(&alice).await?;
    assert_eq!(alice_summary.spent, 2);
    assert_eq!(alice_summary.earned, 0);
    assert_eq!(alice_summary.balance, 498);

    let bob_summary = ledger.balance(&bob).await?;
    assert_eq!(bob_summary.spent, 0);
    assert_eq!(bob_summary.earned, 2);
    assert_eq!(bob_summary.balance, 502);

    let reactions = ledger.post_reactions(&alice, &post.id).await?;
    assert_eq!(reactions.total_received, 2);
    assert_eq!(reactions.spent_by_viewer, 2);
    assert_eq!(ledger.spent_on_post(&bob, &post.id).await?, 0);
    Ok(())
}

#[tokio::test]
async fn test_spend_ceiling_ignores_earned_income() -> Result<()> {
    // Tiny grant so the ceiling is easy to hit
    let env = TestEnv::with_grant(2)?;
    let spender = fixtures::unique_user();
    let fan = fixtures::unique_user();
    let ledger = LedgerService::new(&env.ctx);

    let own_post = fixtures::post(&spender);
    let other_post = fixtures::post(&fan);
    env.ctx.post_store().create(&own_post).await?;
    env.ctx.post_store().create(&other_post).await?;

    // The spender earns plenty first
    for _ in 0..10 {
        ledger.add_reaction(Some(&fan), &own_post.id, &spender).await?;
    }
    assert_eq!(ledger.balance(&spender).await?.earned, 10);

    // Still only the grant is spendable
    ledger.add_reaction(Some(&spender), &other_post.id, &fan).await?;
    ledger.add_reaction(Some(&spender), &other_post.id, &fan).await?;
    let err = ledger
        .add_reaction(Some(&spender), &other_post.id, &fan)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "no JENbucks left");
    assert!(err.is_precondition());

    // The failed spend left no trace in the log
    assert_eq!(ledger.balance(&spender).await?.spent, 2);
    Ok(())
}

#[tokio::test]
async fn test_anonymous_callers_cannot_spend() -> Result<()> {
    let env = TestEnv::new()?;
    let author = fixtures::unique_user();
    let post = fixtures::post(&author);
    env.ctx.post_store().create(&post).await?;

    let err = LedgerService::new(&env.ctx)
        .add_reaction(None, &post.id, &author)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "not signed in");
    assert!(matches!(err, ServiceError::Domain(_)));
    Ok(())
}

#[tokio::test]
async fn test_self_reactions_spend_without_earning() -> Result<()> {
    let env = TestEnv::new()?;
    let user = fixtures::unique_user();
    let ledger = LedgerService::new(&env.ctx);

    let post = fixtures::post(&user);
    env.ctx.post_store().create(&post).await?;

    for _ in 0..3 {
        ledger.add_reaction(Some(&user), &post.id, &user).await?;
    }

    let summary = ledger.balance(&user).await?;
    assert_eq!(summary.spent, 3);
    assert_eq!(summary.earned, 0);
    assert_eq!(summary.balance, 497);

    // The post still shows all three bucks received
    let reactions = ledger.post_reactions(&user, &post.id).await?;
    assert_eq!(reactions.total_received, 3);
    Ok(())
}

#[tokio::test]
async fn test_watch_balance_pushes_a_summary_per_spend() -> Result<()> {
    let env = TestEnv::new()?;
    let alice = fixtures::unique_user();
    let bob = fixtures::unique_user();
    let ledger = LedgerService::new(&env.ctx);

    let post = fixtures::post(&bob);
    env.ctx.post_store().create(&post).await?;

    let mut sub = ledger.watch_balance(&alice);
    let initial = sub.next().await.expect("initial summary");
    assert_eq!(initial.docs[0].balance, 500);

    ledger.add_reaction(Some(&alice), &post.id, &bob).await?;
    let snap = sub.next().await.expect("after spend");
    assert_eq!(snap.docs[0].balance, 499);
    assert_eq!(snap.docs[0].spent, 1);

    // Someone else earning does not change alice's summary values,
    // but the log changed so a recompute still arrives
    ledger.add_reaction(Some(&bob), &post.id, &bob).await?;
    let snap = sub.next().await.expect("after unrelated spend");
    assert_eq!(snap.docs[0].balance, 499);
    Ok(())
}
