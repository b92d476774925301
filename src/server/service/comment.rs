//! Comment service for business logic.
//!
//! Creating a comment on a missing article is unprocessable rather than not found, while
//! listing and deleting comments of a missing article are not found.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        article::ArticleRepository, comment::CommentRepository, follow::FollowRepository,
        user::UserRepository,
    },
    error::AppError,
    middleware::auth::ensure_author,
    model::{
        comment::{Comment, CreateCommentParams},
        user::Profile,
    },
    service::article::find_article,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to an article.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The new comment with its author's profile
    /// - `Err(AppError::UnprocessableEntity)` - No article with that slug
    pub async fn create(
        &self,
        slug: &str,
        params: CreateCommentParams,
    ) -> Result<Comment, AppError> {
        let article = ArticleRepository::new(self.db)
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| {
                AppError::UnprocessableEntity(format!(
                    "Cannot comment on missing article {}",
                    slug
                ))
            })?;

        let author = UserRepository::new(self.db)
            .find_by_id(params.author_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", params.author_id)))?;

        let comment = CommentRepository::new(self.db)
            .create(article.id, params)
            .await?;

        Ok(Comment::from_entity(comment, Profile::from_entity(&author, false)))
    }

    /// Lists the comments of an article in the order they were written.
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments, empty for an article without comments
    /// - `Err(AppError::NotFound)` - No article with that slug
    pub async fn list(&self, slug: &str, viewer: Option<i32>) -> Result<Vec<Comment>, AppError> {
        let article = find_article(self.db, slug).await?;
        let comments = CommentRepository::new(self.db)
            .get_by_article(article.id)
            .await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let mut author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let following = match viewer {
            Some(viewer_id) => {
                FollowRepository::new(self.db)
                    .following_among(viewer_id, &author_ids)
                    .await?
            }
            None => Default::default(),
        };

        comments
            .into_iter()
            .map(|comment| -> Result<Comment, AppError> {
                let author = authors.get(&comment.author_id).ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Author {} of comment {} not found",
                        comment.author_id, comment.id
                    ))
                })?;
                let profile = Profile::from_entity(author, following.contains(&author.id));

                Ok(Comment::from_entity(comment, profile))
            })
            .collect()
    }

    /// Deletes a comment written by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Comment removed
    /// - `Err(AppError::NotFound)` - Missing article, or no such comment on it
    /// - `Err(AppError::AuthErr)` - `user_id` did not write the comment (403)
    pub async fn delete(&self, slug: &str, comment_id: i32, user_id: i32) -> Result<(), AppError> {
        let article = find_article(self.db, slug).await?;

        let comments = CommentRepository::new(self.db);
        let comment = comments
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.article_id == article.id)
            .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", comment_id)))?;

        ensure_author(user_id, comment.author_id, "comment")?;

        comments.delete(comment.id).await?;

        Ok(())
    }
}
