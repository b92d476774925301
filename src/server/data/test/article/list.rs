use super::*;

/// Tests that the tag filter only returns articles whose tag list contains the tag.
///
/// Expected: Ok with the tagged article only, total 1
#[tokio::test]
async fn filters_by_tag_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let tagged = ArticleFactory::new(db, author.id)
        .tags(["dragons", "training"])
        .build()
        .await?;
    ArticleFactory::new(db, author.id)
        .tags(["coffee"])
        .build()
        .await?;
    factory::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .list(&ArticleQuery {
            tag: Some("dragons".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id, tagged.id);

    Ok(())
}

/// Tests that articles come back newest first with id breaking ties.
///
/// Expected: Ok with descending creation order
#[tokio::test]
async fn orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let oldest = ArticleFactory::new(db, author.id)
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newest = ArticleFactory::new(db, author.id)
        .created_at(now)
        .build()
        .await?;
    let middle = ArticleFactory::new(db, author.id)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let (articles, _) = repo.list(&ArticleQuery::default()).await?;
    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

    Ok(())
}

/// Tests that limit and offset shape the page but not the total.
///
/// Expected: Ok with 2 articles and total 5
#[tokio::test]
async fn counts_total_independently_of_pagination() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let now = Utc::now();
    let mut created = Vec::new();
    for i in 0..5 {
        let article = ArticleFactory::new(db, author.id)
            .created_at(now - Duration::minutes(i))
            .build()
            .await?;
        created.push(article.id);
    }

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .list(&ArticleQuery {
            pagination: Pagination {
                limit: Some(2),
                offset: Some(1),
            },
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 5);
    let ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![created[1], created[2]]);

    Ok(())
}

/// Tests filtering by a set of author ids.
///
/// Expected: Ok with only articles written by the listed authors
#[tokio::test]
async fn filters_by_author_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;
    factory::create_article(db, other.id).await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .list(&ArticleQuery {
            author_ids: Some(vec![author.id]),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].id, article.id);

    Ok(())
}

/// Tests that an empty article id restriction matches nothing.
///
/// Expected: Ok with no articles and total 0
#[tokio::test]
async fn empty_id_restriction_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    factory::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .list(&ArticleQuery {
            article_ids: Some(vec![]),
            ..Default::default()
        })
        .await?;

    assert!(articles.is_empty());
    assert_eq!(total, 0);

    Ok(())
}

/// Tests that a tag argument matches anywhere inside the stored tag list.
///
/// Expected: Ok with `drag` matching the article tagged `dragons`
#[tokio::test]
async fn tag_filter_matches_partial_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let tagged = ArticleFactory::new(db, author.id)
        .tags(["dragons"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .list(&ArticleQuery {
            tag: Some("drag".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].id, tagged.id);

    Ok(())
}

/// Tests that `%` and `_` in the tag argument are matched literally.
///
/// Expected: Ok with no matches for `%` or `r_st` against the tag `rust`
#[tokio::test]
async fn tag_filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    ArticleFactory::new(db, author.id)
        .tags(["rust"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    for tag in ["%", "r_st"] {
        let (articles, total) = repo
            .list(&ArticleQuery {
                tag: Some(tag.to_string()),
                ..Default::default()
            })
            .await?;

        assert_eq!(total, 0, "tag {:?} should not match", tag);
        assert!(articles.is_empty());
    }

    Ok(())
}

/// Tests that the tag filter distinguishes letter case.
///
/// Expected: Ok with `dragons` matching only the lowercase tag
#[tokio::test]
async fn tag_filter_is_case_sensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    ArticleFactory::new(db, author.id)
        .tags(["Dragons"])
        .build()
        .await?;
    let lowercase = ArticleFactory::new(db, author.id)
        .tags(["dragons"])
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .list(&ArticleQuery {
            tag: Some("dragons".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].id, lowercase.id);

    Ok(())
}
