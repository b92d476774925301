use super::*;

/// Tests that a user following nobody has an empty following set.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn empty_when_following_nobody() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let loner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    factory::create_follow(db, other.id, loner.id).await?;

    let repo = FollowRepository::new(db);

    assert!(repo.following_ids(loner.id).await?.is_empty());
    assert!(repo.following_among(loner.id, &[other.id]).await?.is_empty());

    Ok(())
}

/// Tests narrowing a set of authors to the ones being followed.
///
/// Expected: Ok with only the followed author
#[tokio::test]
async fn narrows_candidates_to_followed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let reader = factory::create_user(db).await?;
    let followed = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    factory::create_follow(db, reader.id, followed.id).await?;

    let repo = FollowRepository::new(db);
    let among = repo
        .following_among(reader.id, &[followed.id, stranger.id])
        .await?;

    assert_eq!(among.len(), 1);
    assert!(among.contains(&followed.id));

    Ok(())
}
