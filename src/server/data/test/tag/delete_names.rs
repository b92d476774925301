use super::*;

/// Tests that only the named tags are removed.
///
/// Expected: Ok(1) with the other tags kept
#[tokio::test]
async fn removes_named_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.record(&["dragons".to_string(), "coffee".to_string()])
        .await?;

    let removed = repo
        .delete_names(&["dragons".to_string(), "unknown".to_string()])
        .await?;

    assert_eq!(removed, 1);
    assert_eq!(repo.get_all().await?, vec!["coffee"]);

    Ok(())
}

/// Tests that an empty name list deletes nothing.
///
/// Expected: Ok(0)
#[tokio::test]
async fn empty_names_remove_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.record(&["coffee".to_string()]).await?;

    assert_eq!(repo.delete_names(&[]).await?, 0);
    assert_eq!(repo.get_all().await?, vec!["coffee"]);

    Ok(())
}
