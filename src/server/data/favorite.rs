//! Favorite data repository.
//!
//! Favorites form the many-to-many relation between users and articles, keyed by the
//! `(user_id, article_id)` pair. The article's `favorites_count` column is maintained by the
//! favorite service from [`FavoriteRepository::count_for_article`].

use std::collections::HashSet;

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QuerySelect,
};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds the favorite unless it already exists.
    ///
    /// # Returns
    /// - `Ok(true)` - A new row was inserted
    /// - `Ok(false)` - The user had already favorited the article
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(&self, user_id: i32, article_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::Favorite::find_by_id((user_id, article_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            article_id: ActiveValue::Set(article_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    /// Removes the favorite if present; returns whether a row was deleted.
    pub async fn remove(&self, user_id: i32, article_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Favorite::delete_by_id((user_id, article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count_for_article(&self, article_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::ArticleId.eq(article_id))
            .count(self.db)
            .await
    }

    /// Ids of every article the user has favorited.
    pub async fn article_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Favorite::find()
            .select_only()
            .column(entity::favorite::Column::ArticleId)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Subset of `article_ids` the user has favorited.
    pub async fn favorited_among(
        &self,
        user_id: i32,
        article_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if article_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = entity::prelude::Favorite::find()
            .select_only()
            .column(entity::favorite::Column::ArticleId)
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(entity::favorite::Column::ArticleId.is_in(article_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }

    /// Removes every favorite of an article.
    pub async fn delete_by_article(&self, article_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::ArticleId.eq(article_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
