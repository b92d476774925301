//! Article service for business logic.
//!
//! This module provides the `ArticleService` for the article listing, the feed and
//! article mutations. It resolves the usernames in listing filters, generates unique
//! slugs, enforces authorship on update and delete, and enriches entity models with the
//! viewer-relative `favorited` and author `following` flags.

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        article::ArticleRepository, comment::CommentRepository, favorite::FavoriteRepository,
        follow::FollowRepository, tag::TagRepository, user::UserRepository,
    },
    error::AppError,
    middleware::auth::ensure_author,
    model::{
        article::{
            Article, ArticleFilter, ArticleQuery, CreateArticleParams, PaginatedArticles,
            Pagination, UpdateArticleParams,
        },
        user::Profile,
    },
    util::{slug::generate_slug, tag_list},
};

/// Attempts at drawing a slug suffix that is not in use yet.
const MAX_SLUG_ATTEMPTS: usize = 5;

pub struct ArticleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists articles matching the filter, newest first.
    ///
    /// Usernames in the filter are resolved to ids first. An unknown author or
    /// favorited-by username, as well as a user without favorites, yields an empty page
    /// rather than an error.
    ///
    /// # Arguments
    /// - `filter` - Tag, author and favorited-by filters plus pagination
    /// - `viewer` - Id of the requesting user, `None` for anonymous requests
    ///
    /// # Returns
    /// - `Ok(PaginatedArticles)` - Page of articles and the total number of matches
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(
        &self,
        filter: ArticleFilter,
        viewer: Option<i32>,
    ) -> Result<PaginatedArticles, AppError> {
        let users = UserRepository::new(self.db);

        let author_ids = match &filter.author {
            Some(username) => match users.find_by_username(username).await? {
                Some(author) => Some(vec![author.id]),
                None => return Ok(PaginatedArticles::empty()),
            },
            None => None,
        };

        let article_ids = match &filter.favorited {
            Some(username) => match users.find_by_username(username).await? {
                Some(user) => Some(
                    FavoriteRepository::new(self.db)
                        .article_ids_for_user(user.id)
                        .await?,
                ),
                None => return Ok(PaginatedArticles::empty()),
            },
            None => None,
        };

        let query = ArticleQuery {
            tag: filter.tag,
            author_ids,
            article_ids,
            pagination: filter.pagination,
        };

        self.query(&query, viewer).await
    }

    /// Lists articles written by users the requester follows, newest first.
    pub async fn feed(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PaginatedArticles, AppError> {
        let following = FollowRepository::new(self.db).following_ids(user_id).await?;
        if following.is_empty() {
            return Ok(PaginatedArticles::empty());
        }

        let query = ArticleQuery {
            author_ids: Some(following),
            pagination,
            ..Default::default()
        };

        self.query(&query, Some(user_id)).await
    }

    /// Gets a single article by slug.
    ///
    /// # Returns
    /// - `Ok(Article)` - Article with flags relative to `viewer`
    /// - `Err(AppError::NotFound)` - No article with that slug
    pub async fn get_by_slug(&self, slug: &str, viewer: Option<i32>) -> Result<Article, AppError> {
        let article = find_article(self.db, slug).await?;

        single(self.db, article, viewer).await
    }

    /// Creates an article authored by `params.author_id` and records its tags.
    ///
    /// The slug is the slugified title plus a random suffix; a suffix already in use is
    /// redrawn a few times before giving up, and the unique index guards the rest.
    pub async fn create(&self, params: CreateArticleParams) -> Result<Article, AppError> {
        let author_id = params.author_id;
        let txn = self.db.begin().await?;

        let articles = ArticleRepository::new(&txn);
        let slug = unique_slug(&articles, &params.title).await?;
        let tags = params.tag_list.clone();

        let article = articles.create(slug, params).await?;
        TagRepository::new(&txn).record(&tags).await?;

        txn.commit().await?;

        tracing::info!("Article {} created by user {}", article.slug, author_id);

        single(self.db, article, Some(author_id)).await
    }

    /// Applies a partial update to an article owned by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Article)` - Updated article
    /// - `Err(AppError::NotFound)` - No article with that slug
    /// - `Err(AppError::AuthErr)` - `user_id` is not the author (403)
    pub async fn update(
        &self,
        slug: &str,
        user_id: i32,
        params: UpdateArticleParams,
    ) -> Result<Article, AppError> {
        let article = find_article(self.db, slug).await?;
        ensure_author(user_id, article.author_id, "article")?;

        let previous_tags = tag_list::decode(&article.tag_list);
        let txn = self.db.begin().await?;

        if let Some(tags) = &params.tag_list {
            TagRepository::new(&txn).record(tags).await?;
        }
        let article = ArticleRepository::new(&txn).update(article, params).await?;
        prune_tags(&txn, previous_tags).await?;

        txn.commit().await?;

        single(self.db, article, Some(user_id)).await
    }

    /// Deletes an article owned by `user_id` together with its comments and favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Article and dependents removed atomically
    /// - `Err(AppError::NotFound)` - No article with that slug
    /// - `Err(AppError::AuthErr)` - `user_id` is not the author (403)
    pub async fn delete(&self, slug: &str, user_id: i32) -> Result<(), AppError> {
        let article = find_article(self.db, slug).await?;
        ensure_author(user_id, article.author_id, "article")?;

        let txn = self.db.begin().await?;

        let comments = CommentRepository::new(&txn)
            .delete_by_article(article.id)
            .await?;
        let favorites = FavoriteRepository::new(&txn)
            .delete_by_article(article.id)
            .await?;
        ArticleRepository::new(&txn).delete(article.id).await?;
        prune_tags(&txn, tag_list::decode(&article.tag_list)).await?;

        txn.commit().await?;

        tracing::info!(
            "Article {} deleted with {} comments and {} favorites",
            article.slug,
            comments,
            favorites
        );

        Ok(())
    }

    async fn query(
        &self,
        query: &ArticleQuery,
        viewer: Option<i32>,
    ) -> Result<PaginatedArticles, AppError> {
        let (entities, total) = ArticleRepository::new(self.db).list(query).await?;
        let articles = hydrate(self.db, entities, viewer).await?;

        Ok(PaginatedArticles { articles, total })
    }
}

/// Finds an article by slug, mapping absence to `NotFound`.
pub(crate) async fn find_article<C: ConnectionTrait>(
    db: &C,
    slug: &str,
) -> Result<entity::article::Model, AppError> {
    ArticleRepository::new(db)
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Article {} not found", slug)))
}

/// Converts a single entity into a domain article relative to `viewer`.
pub(crate) async fn single<C: ConnectionTrait>(
    db: &C,
    article: entity::article::Model,
    viewer: Option<i32>,
) -> Result<Article, AppError> {
    hydrate(db, vec![article], viewer)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::InternalError("Article vanished while loading".to_string()))
}

/// Attaches author profiles and viewer flags to article entities, keeping their order.
///
/// Loads authors, the viewer's favorites among the articles and the viewer's follows
/// among the authors with one query each.
pub(crate) async fn hydrate<C: ConnectionTrait>(
    db: &C,
    entities: Vec<entity::article::Model>,
    viewer: Option<i32>,
) -> Result<Vec<Article>, AppError> {
    if entities.is_empty() {
        return Ok(Vec::new());
    }

    let mut author_ids: Vec<i32> = entities.iter().map(|a| a.author_id).collect();
    author_ids.sort_unstable();
    author_ids.dedup();
    let article_ids: Vec<i32> = entities.iter().map(|a| a.id).collect();

    let authors: HashMap<i32, entity::user::Model> = UserRepository::new(db)
        .find_by_ids(&author_ids)
        .await?
        .into_iter()
        .map(|u| (u.id, u))
        .collect();

    let (favorited, following) = match viewer {
        Some(viewer_id) => (
            FavoriteRepository::new(db)
                .favorited_among(viewer_id, &article_ids)
                .await?,
            FollowRepository::new(db)
                .following_among(viewer_id, &author_ids)
                .await?,
        ),
        None => Default::default(),
    };

    entities
        .into_iter()
        .map(|article| -> Result<Article, AppError> {
            let author = authors.get(&article.author_id).ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Author {} of article {} not found",
                    article.author_id, article.id
                ))
            })?;
            let profile = Profile::from_entity(author, following.contains(&author.id));
            let is_favorite = favorited.contains(&article.id);

            Ok(Article::from_entity(article, profile, is_favorite))
        })
        .collect()
}

/// Removes the candidate tags that no article lists anymore.
async fn prune_tags<C: ConnectionTrait>(db: &C, candidates: Vec<String>) -> Result<(), AppError> {
    let articles = ArticleRepository::new(db);

    let mut unused = Vec::new();
    for tag in candidates {
        if !articles.tag_in_use(&tag).await? {
            unused.push(tag);
        }
    }

    let removed = TagRepository::new(db).delete_names(&unused).await?;
    if removed > 0 {
        tracing::debug!("Pruned {} unused tags", removed);
    }

    Ok(())
}

async fn unique_slug<C: ConnectionTrait>(
    articles: &ArticleRepository<'_, C>,
    title: &str,
) -> Result<String, AppError> {
    for _ in 0..MAX_SLUG_ATTEMPTS {
        let slug = generate_slug(title);
        if !articles.slug_exists(&slug).await? {
            return Ok(slug);
        }
        tracing::debug!("Slug {} already taken, drawing another suffix", slug);
    }

    Err(AppError::InternalError(format!(
        "Could not generate a unique slug for '{}'",
        title
    )))
}
