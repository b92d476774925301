//! Comment factory for creating test comment entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment on `article_id` written by `author_id`.
///
/// # Returns
/// - `Ok(entity::comment::Model)` - Created comment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_comment(
    db: &DatabaseConnection,
    article_id: i32,
    author_id: i32,
    body: impl Into<String>,
) -> Result<entity::comment::Model, DbErr> {
    let now = Utc::now();
    entity::comment::ActiveModel {
        body: ActiveValue::Set(body.into()),
        author_id: ActiveValue::Set(author_id),
        article_id: ActiveValue::Set(article_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
