use super::*;

/// Tests an empty tag table lists no tags.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
