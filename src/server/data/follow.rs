//! Follow data repository.
//!
//! Follow edges are directed: `follower_id` follows `following_id`. The pair is unique in
//! the schema and the repository never inserts a duplicate.

use std::collections::HashSet;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect,
};

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn is_following(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Follow::find()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates the follow edge if absent.
    ///
    /// # Returns
    /// - `Ok(true)` - A new edge was inserted
    /// - `Ok(false)` - The edge already existed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn follow(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        if self.is_following(follower_id, following_id).await? {
            return Ok(false);
        }

        entity::follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            following_id: ActiveValue::Set(following_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes the follow edge if present; returns whether a row was deleted.
    pub async fn unfollow(&self, follower_id: i32, following_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Follow::delete_many()
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.eq(following_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids of every user `follower_id` follows.
    pub async fn following_ids(&self, follower_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::FollowingId)
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Subset of `user_ids` that `follower_id` follows.
    pub async fn following_among(
        &self,
        follower_id: i32,
        user_ids: &[i32],
    ) -> Result<HashSet<i32>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<i32> = entity::prelude::Follow::find()
            .select_only()
            .column(entity::follow::Column::FollowingId)
            .filter(entity::follow::Column::FollowerId.eq(follower_id))
            .filter(entity::follow::Column::FollowingId.is_in(user_ids.to_vec()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(ids.into_iter().collect())
    }
}
