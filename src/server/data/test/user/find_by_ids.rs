use super::*;

/// Tests fetching several users in one query while skipping unknown ids.
///
/// Expected: Ok with only the existing users
#[tokio::test]
async fn fetches_existing_users_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let mut ids: Vec<i32> = repo
        .find_by_ids(&[first.id, second.id, 9999])
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that an empty id list short-circuits to an empty result.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_empty_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_ids(&[]).await?.is_empty());

    Ok(())
}
