use super::*;

/// Tests creating a comment on an article.
///
/// Expected: Ok with the comment retrievable by id
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, reader, article) = factory::helpers::create_article_with_reader(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(
            article.id,
            CreateCommentParams {
                author_id: reader.id,
                body: "Thank you so much!".to_string(),
            },
        )
        .await?;

    assert_eq!(comment.article_id, article.id);
    assert_eq!(comment.author_id, reader.id);

    let found = repo.find_by_id(comment.id).await?;
    assert_eq!(found.map(|c| c.body), Some("Thank you so much!".to_string()));

    Ok(())
}
