use super::*;

/// Tests that only provided fields change and the slug stays stable.
///
/// Expected: Ok with merged fields and refreshed updated_at
#[tokio::test]
async fn merges_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let article = ArticleFactory::new(db, author.id)
        .title("Original")
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let updated = repo
        .update(
            article.clone(),
            UpdateArticleParams {
                title: Some("Renamed".to_string()),
                tag_list: Some(vec!["new".to_string()]),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.slug, article.slug);
    assert_eq!(updated.body, article.body);
    assert_eq!(updated.tag_list, "new");
    assert!(updated.updated_at > article.updated_at);

    Ok(())
}
