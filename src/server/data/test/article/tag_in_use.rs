use super::*;

/// Tests that a tag listed on an article is reported as in use.
///
/// Expected: Ok(true)
#[tokio::test]
async fn reports_listed_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    ArticleFactory::new(db, author.id)
        .tags(["rust", "dragons", "coffee"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.tag_in_use("rust").await?);
    assert!(repo.tag_in_use("dragons").await?);
    assert!(repo.tag_in_use("coffee").await?);

    Ok(())
}

/// Tests that only whole tags count, so a prefix of another tag is not in use.
///
/// Expected: Ok(false) for `drag` when only `dragons` is listed
#[tokio::test]
async fn ignores_partial_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    ArticleFactory::new(db, author.id)
        .tags(["dragons"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    assert!(!repo.tag_in_use("drag").await?);
    assert!(!repo.tag_in_use("%").await?);

    Ok(())
}
