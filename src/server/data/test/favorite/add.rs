use super::*;

/// Tests that adding a favorite twice inserts a single row.
///
/// Expected: Ok(true) then Ok(false), count 1
#[tokio::test]
async fn adds_favorite_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reader, article) = factory::helpers::create_article_with_reader(db).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.add(reader.id, article.id).await?);
    assert!(!repo.add(reader.id, article.id).await?);
    assert_eq!(repo.count_for_article(article.id).await?, 1);

    Ok(())
}
