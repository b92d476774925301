use super::*;

/// Tests deleting an article without dependents removes the row.
///
/// Expected: Ok and the article is gone
#[tokio::test]
async fn deletes_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let article = factory::create_article(db, author.id).await?;

    let repo = ArticleRepository::new(db);
    repo.delete(article.id).await?;

    let found = entity::prelude::Article::find_by_id(article.id).one(db).await?;
    assert!(found.is_none());

    Ok(())
}
