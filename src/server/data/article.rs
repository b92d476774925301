//! Article data repository for database operations.
//!
//! This module provides the `ArticleRepository`, including the filtered and paginated
//! listing query used by both the public article list and the feed. Tags are stored
//! comma-joined in a single column, so the tag filter is a substring match over it.
//! Matching uses `instr` rather than `LIKE` so that `%` and `_` in a tag are literal and
//! case is significant.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    model::article::{ArticleQuery, CreateArticleParams, UpdateArticleParams},
    util::tag_list,
};

pub struct ArticleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ArticleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists articles matching the query, newest first.
    ///
    /// The total is counted over the filtered set before limit and offset are applied.
    /// An id restriction that is present but empty matches nothing and skips the query.
    ///
    /// # Returns
    /// - `Ok((articles, total))` - One page of articles and the number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn list(
        &self,
        query: &ArticleQuery,
    ) -> Result<(Vec<entity::article::Model>, u64), DbErr> {
        let restricted_to_nothing = [&query.author_ids, &query.article_ids]
            .into_iter()
            .any(|ids| matches!(ids, Some(ids) if ids.is_empty()));
        if restricted_to_nothing {
            return Ok((Vec::new(), 0));
        }

        let mut select = entity::prelude::Article::find();

        if let Some(tag) = &query.tag {
            select = select.filter(Expr::cust_with_values(
                "instr(\"tag_list\", ?) > 0",
                [tag.clone()],
            ));
        }
        if let Some(author_ids) = &query.author_ids {
            select = select.filter(entity::article::Column::AuthorId.is_in(author_ids.clone()));
        }
        if let Some(article_ids) = &query.article_ids {
            select = select.filter(entity::article::Column::Id.is_in(article_ids.clone()));
        }

        let total = select.clone().count(self.db).await?;

        let mut page = select
            .order_by_desc(entity::article::Column::CreatedAt)
            .order_by_desc(entity::article::Column::Id);
        if let Some(limit) = query.pagination.limit {
            page = page.limit(limit);
        }
        if let Some(offset) = query.pagination.offset {
            page = page.offset(offset);
        }

        let articles = page.all(self.db).await?;

        Ok((articles, total))
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::article::Model>, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Checks whether any article already uses `slug`.
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find()
            .filter(entity::article::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Inserts a new article with zero favorites.
    ///
    /// # Arguments
    /// - `slug` - Unique slug, generated by the caller
    /// - `params` - Validated article fields including the author
    pub async fn create(
        &self,
        slug: String,
        params: CreateArticleParams,
    ) -> Result<entity::article::Model, DbErr> {
        let now = Utc::now();

        entity::article::ActiveModel {
            slug: ActiveValue::Set(slug),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            body: ActiveValue::Set(params.body),
            tag_list: ActiveValue::Set(tag_list::encode(&params.tag_list)),
            favorites_count: ActiveValue::Set(0),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the provided fields to an article and refreshes `updated_at`.
    ///
    /// The slug is never changed, even when the title is.
    pub async fn update(
        &self,
        article: entity::article::Model,
        params: UpdateArticleParams,
    ) -> Result<entity::article::Model, DbErr> {
        let mut active_model: entity::article::ActiveModel = article.into();

        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(body) = params.body {
            active_model.body = ActiveValue::Set(body);
        }
        if let Some(tags) = params.tag_list {
            active_model.tag_list = ActiveValue::Set(tag_list::encode(&tags));
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Overwrites the denormalized favorites counter.
    pub async fn set_favorites_count(
        &self,
        article: entity::article::Model,
        count: u64,
    ) -> Result<entity::article::Model, DbErr> {
        let mut active_model: entity::article::ActiveModel = article.into();
        active_model.favorites_count = ActiveValue::Set(count as i32);

        active_model.update(self.db).await
    }

    /// Checks whether any article still lists `tag` as one of its tags.
    ///
    /// Compares whole entries of the comma-joined column, so `drag` is not in use just
    /// because `dragons` is.
    pub async fn tag_in_use(&self, tag: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find()
            .filter(Expr::cust_with_values(
                "instr(',' || \"tag_list\" || ',', ?) > 0",
                [format!(",{},", tag)],
            ))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the article row only; comments and favorites are removed by the caller.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Article::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
