use super::*;

/// Tests listing favorited article ids and narrowing a candidate set.
///
/// Expected: Ok with only the favorited article
#[tokio::test]
async fn returns_favorited_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, reader, article) = factory::helpers::create_article_with_reader(db).await?;
    let other = factory::create_article(db, author.id).await?;
    factory::create_favorite(db, reader.id, article.id).await?;

    let repo = FavoriteRepository::new(db);

    assert_eq!(repo.article_ids_for_user(reader.id).await?, vec![article.id]);
    assert!(repo.article_ids_for_user(author.id).await?.is_empty());

    let among = repo
        .favorited_among(reader.id, &[article.id, other.id])
        .await?;
    assert!(among.contains(&article.id));
    assert!(!among.contains(&other.id));

    Ok(())
}
