use super::*;

/// Tests that only the provided fields are changed.
///
/// Expected: Ok(Model) with new bio and image, username and email untouched
#[tokio::test]
async fn updates_provided_fields_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("jake")
        .email("jake@jake.jake")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.clone(),
            UpdateUserParams {
                bio: Some("I like to skateboard".to_string()),
                image: Some("https://i.stack.imgur.com/xHWG8.jpg".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.username, "jake");
    assert_eq!(updated.email, "jake@jake.jake");
    assert_eq!(updated.bio, "I like to skateboard");
    assert_eq!(updated.image, "https://i.stack.imgur.com/xHWG8.jpg");
    assert_eq!(repo.find_by_username("jake").await?, Some(updated));

    Ok(())
}

/// Tests that taking another user's username violates the unique constraint.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn duplicate_username_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_named(db, "jake").await?;
    let other = factory::user::create_user_named(db, "anna").await?;

    let repo = UserRepository::new(db);
    let result = repo
        .update(
            other,
            UpdateUserParams {
                username: Some("jake".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
