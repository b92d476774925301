use super::*;

/// Tests that recording tags ignores duplicates within and across calls.
///
/// Expected: Ok with each name stored once
#[tokio::test]
async fn records_each_tag_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.record(&["dragons".to_string(), "dragons".to_string()])
        .await?;
    repo.record(&["dragons".to_string(), "coffee".to_string()])
        .await?;

    assert_eq!(repo.get_all().await?, vec!["coffee", "dragons"]);

    Ok(())
}

/// Tests that recording only known tags succeeds without inserting anything.
///
/// Expected: Ok(()) with the tag list unchanged
#[tokio::test]
async fn ignores_only_known_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.record(&["dragons".to_string()]).await?;
    repo.record(&["dragons".to_string()]).await?;
    repo.record(&[]).await?;

    assert_eq!(repo.get_all().await?, vec!["dragons"]);

    Ok(())
}
