use super::*;

/// Tests unfollowing removes the edge and a repeat is a no-op.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn unfollows_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let celeb = factory::create_user(db).await?;
    factory::create_follow(db, follower.id, celeb.id).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.unfollow(follower.id, celeb.id).await?);
    assert!(!repo.unfollow(follower.id, celeb.id).await?);
    assert!(!repo.is_following(follower.id, celeb.id).await?);

    Ok(())
}
