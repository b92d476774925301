//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
///
/// Tags are stored comma-joined, matching the column format used by the server.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    slug: String,
    title: String,
    description: String,
    body: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory with default values.
    ///
    /// Defaults:
    /// - slug: `"article-{id}"`
    /// - title: `"Article {id}"`
    /// - tags: none
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            slug: format!("article-{}", id),
            title: format!("Article {}", id),
            description: "Article description".to_string(),
            body: "Article body".to_string(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the tag list.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the creation timestamp, useful for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            body: ActiveValue::Set(self.body),
            tag_list: ActiveValue::Set(self.tags.join(",")),
            favorites_count: ActiveValue::Set(0),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article with default values written by `author_id`.
pub async fn create_article(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, author_id).build().await
}
