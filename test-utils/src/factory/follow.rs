//! Follow factory for creating follow edges between users.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a follow edge from `follower_id` to `following_id`.
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    following_id: i32,
) -> Result<entity::follow::Model, DbErr> {
    entity::follow::ActiveModel {
        follower_id: ActiveValue::Set(follower_id),
        following_id: ActiveValue::Set(following_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
