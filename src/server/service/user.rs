//! User service for changes the current user makes to their own record.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Updates `user` with the provided changes.
    ///
    /// Username and email stay unique across users; keeping one's own value is allowed.
    ///
    /// # Returns
    /// - `Ok(User)` - The user after the update
    /// - `Err(AppError::UnprocessableEntity)` - Username or email belongs to another user
    pub async fn update(
        &self,
        user: entity::user::Model,
        params: UpdateUserParams,
    ) -> Result<User, AppError> {
        if params == UpdateUserParams::default() {
            return Ok(User::from_entity(user));
        }

        let txn = self.db.begin().await?;
        let users = UserRepository::new(&txn);

        if let Some(username) = &params.username {
            if let Some(owner) = users.find_by_username(username).await? {
                if owner.id != user.id {
                    return Err(AppError::UnprocessableEntity(
                        "username has already been taken".to_string(),
                    ));
                }
            }
        }
        if let Some(email) = &params.email {
            if let Some(owner) = users.find_by_email(email).await? {
                if owner.id != user.id {
                    return Err(AppError::UnprocessableEntity(
                        "email has already been taken".to_string(),
                    ));
                }
            }
        }

        let user = users.update(user, params).await?;
        txn.commit().await?;

        tracing::info!("User {} updated their account", user.id);

        Ok(User::from_entity(user))
    }
}
