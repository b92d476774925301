//! Profile service for viewing and following users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{follow::FollowRepository, user::UserRepository},
    error::AppError,
    model::user::Profile,
};

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's profile with `following` relative to `viewer`.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile of the user
    /// - `Err(AppError::NotFound)` - No user with that username
    pub async fn get(&self, username: &str, viewer: Option<i32>) -> Result<Profile, AppError> {
        let user = self.find_user(username).await?;

        let following = match viewer {
            Some(viewer_id) => {
                FollowRepository::new(self.db)
                    .is_following(viewer_id, user.id)
                    .await?
            }
            None => false,
        };

        Ok(Profile::from_entity(&user, following))
    }

    /// Makes `follower_id` follow `username`; following twice is a no-op.
    ///
    /// # Returns
    /// - `Ok(Profile)` - Profile with `following` true
    /// - `Err(AppError::NotFound)` - No user with that username
    /// - `Err(AppError::BadRequest)` - Attempt to follow oneself
    pub async fn follow(&self, username: &str, follower_id: i32) -> Result<Profile, AppError> {
        let user = self.find_user(username).await?;
        if user.id == follower_id {
            return Err(AppError::BadRequest("You cannot follow yourself".to_string()));
        }

        FollowRepository::new(self.db)
            .follow(follower_id, user.id)
            .await?;

        Ok(Profile::from_entity(&user, true))
    }

    /// Removes the follow edge if present.
    pub async fn unfollow(&self, username: &str, follower_id: i32) -> Result<Profile, AppError> {
        let user = self.find_user(username).await?;

        FollowRepository::new(self.db)
            .unfollow(follower_id, user.id)
            .await?;

        Ok(Profile::from_entity(&user, false))
    }

    async fn find_user(&self, username: &str) -> Result<entity::user::Model, AppError> {
        UserRepository::new(self.db)
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Profile {} not found", username)))
    }
}
