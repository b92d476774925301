use super::*;

/// Tests that comments come back in insertion order for their article only.
///
/// Expected: Ok with two comments in order
#[tokio::test]
async fn returns_comments_in_storage_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, reader, article) = factory::helpers::create_article_with_reader(db).await?;
    let other = factory::create_article(db, author.id).await?;
    let first = factory::create_comment(db, article.id, reader.id, "first").await?;
    let second = factory::create_comment(db, article.id, author.id, "second").await?;
    factory::create_comment(db, other.id, reader.id, "elsewhere").await?;

    let repo = CommentRepository::new(db);
    let ids: Vec<i32> = repo
        .get_by_article(article.id)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests an article without comments yields an empty list.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_without_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_reader(db).await?;

    let repo = CommentRepository::new(db);

    assert!(repo.get_by_article(article.id).await?.is_empty());

    Ok(())
}
