use super::*;

/// Tests finding users by exact email.
///
/// Expected: Ok(Some) for the stored email, Ok(None) otherwise
#[tokio::test]
async fn finds_user_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("jake@jake.jake")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_email("jake@jake.jake").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_email("anna@jake.jake").await?.is_none());

    Ok(())
}
