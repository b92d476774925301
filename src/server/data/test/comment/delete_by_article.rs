use super::*;

/// Tests deleting a single comment and then all remaining comments of an article.
///
/// Expected: Ok with the article left without comments
#[tokio::test]
async fn deletes_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reader, article) = factory::helpers::create_article_with_reader(db).await?;
    let first = factory::create_comment(db, article.id, reader.id, "first").await?;
    factory::create_comment(db, article.id, reader.id, "second").await?;
    factory::create_comment(db, article.id, reader.id, "third").await?;

    let repo = CommentRepository::new(db);
    repo.delete(first.id).await?;

    assert!(repo.find_by_id(first.id).await?.is_none());
    assert_eq!(repo.delete_by_article(article.id).await?, 2);
    assert!(repo.get_by_article(article.id).await?.is_empty());

    Ok(())
}
