use super::*;

/// Tests removing an existing favorite and then removing it again.
///
/// Expected: Ok(true) then Ok(false), count 0
#[tokio::test]
async fn removes_favorite_idempotently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reader, article) = factory::helpers::create_article_with_reader(db).await?;
    factory::create_favorite(db, reader.id, article.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.remove(reader.id, article.id).await?);
    assert!(!repo.remove(reader.id, article.id).await?);
    assert_eq!(repo.count_for_article(article.id).await?, 0);

    Ok(())
}

/// Tests removing every favorite of one article leaves other articles untouched.
///
/// Expected: Ok(2) rows removed, other article keeps its favorite
#[tokio::test]
async fn deletes_by_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, reader, article) = factory::helpers::create_article_with_reader(db).await?;
    let other = factory::create_article(db, author.id).await?;
    factory::create_favorite(db, reader.id, article.id).await?;
    factory::create_favorite(db, author.id, article.id).await?;
    factory::create_favorite(db, reader.id, other.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.delete_by_article(article.id).await?, 2);
    assert_eq!(repo.count_for_article(other.id).await?, 1);

    Ok(())
}
