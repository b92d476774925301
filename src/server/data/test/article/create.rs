use super::*;

/// Tests creating an article stores encoded tags and zero favorites.
///
/// Expected: Ok with the article persisted under the given slug
#[tokio::test]
async fn creates_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = ArticleRepository::new(db);
    let article = repo
        .create(
            "how-to-train-your-dragon-abc".to_string(),
            CreateArticleParams {
                author_id: author.id,
                title: "How to train your dragon".to_string(),
                description: "Ever wonder how?".to_string(),
                body: "You have to believe".to_string(),
                tag_list: vec!["dragons".to_string(), "training".to_string()],
            },
        )
        .await?;

    assert_eq!(article.tag_list, "dragons,training");
    assert_eq!(article.favorites_count, 0);
    assert_eq!(article.author_id, author.id);

    let found = repo.find_by_slug("how-to-train-your-dragon-abc").await?;
    assert_eq!(found.map(|a| a.id), Some(article.id));
    assert!(repo.slug_exists("how-to-train-your-dragon-abc").await?);
    assert!(!repo.slug_exists("something-else").await?);

    Ok(())
}
