//! Favorite service for toggling favorites on articles.
//!
//! Each toggle runs in one transaction: the favorite row is added or removed and the
//! article's `favorites_count` is recomputed from the relation before committing, so the
//! counter always equals the number of favorite rows. Both toggles are idempotent.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{article::ArticleRepository, favorite::FavoriteRepository},
    error::AppError,
    model::article::Article,
    service::article::{find_article, single},
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks the article as favorited by `user_id`.
    ///
    /// # Returns
    /// - `Ok(Article)` - Article with `favorited` true and the refreshed count
    /// - `Err(AppError::NotFound)` - No article with that slug
    pub async fn favorite(&self, slug: &str, user_id: i32) -> Result<Article, AppError> {
        self.toggle(slug, user_id, true).await
    }

    /// Removes the user's favorite from the article if present.
    pub async fn unfavorite(&self, slug: &str, user_id: i32) -> Result<Article, AppError> {
        self.toggle(slug, user_id, false).await
    }

    async fn toggle(&self, slug: &str, user_id: i32, on: bool) -> Result<Article, AppError> {
        let txn = self.db.begin().await?;

        let article = find_article(&txn, slug).await?;

        let favorites = FavoriteRepository::new(&txn);
        let changed = if on {
            favorites.add(user_id, article.id).await?
        } else {
            favorites.remove(user_id, article.id).await?
        };

        let count = favorites.count_for_article(article.id).await?;
        let article = ArticleRepository::new(&txn)
            .set_favorites_count(article, count)
            .await?;

        txn.commit().await?;

        if changed {
            tracing::debug!(
                "User {} {} article {}",
                user_id,
                if on { "favorited" } else { "unfavorited" },
                article.slug
            );
        }

        single(self.db, article, Some(user_id)).await
    }
}
