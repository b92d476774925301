//! Favorite factory for marking articles as favorited.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

/// Marks `article_id` as favorited by `user_id`.
///
/// Keeps the article's `favorites_count` equal to the number of favorite rows so
/// fixtures never start from an inconsistent counter.
pub async fn create_favorite(
    db: &DatabaseConnection,
    user_id: i32,
    article_id: i32,
) -> Result<entity::article::Model, DbErr> {
    entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        article_id: ActiveValue::Set(article_id),
    })
    .exec_without_returning(db)
    .await?;

    let count = entity::prelude::Favorite::find()
        .filter(entity::favorite::Column::ArticleId.eq(article_id))
        .count(db)
        .await?;

    let article = entity::prelude::Article::find_by_id(article_id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "Article with id {} not found",
            article_id
        )))?;

    let mut active_model: entity::article::ActiveModel = article.into();
    active_model.favorites_count = ActiveValue::Set(count as i32);
    active_model.update(db).await
}
