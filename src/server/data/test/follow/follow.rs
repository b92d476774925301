use super::*;

/// Tests that following twice creates a single edge.
///
/// Expected: Ok(true) then Ok(false), is_following true
#[tokio::test]
async fn follows_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let celeb = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.follow(follower.id, celeb.id).await?);
    assert!(!repo.follow(follower.id, celeb.id).await?);
    assert!(repo.is_following(follower.id, celeb.id).await?);
    assert!(!repo.is_following(celeb.id, follower.id).await?);
    assert_eq!(repo.following_ids(follower.id).await?, vec![celeb.id]);

    Ok(())
}
