use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::token::extract_token,
    state::AppState,
};

/// User id resolved from the request's bearer token.
///
/// Inserted into every request by [`authenticate`]; `None` for anonymous requests and for
/// requests whose token failed verification.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthUser(pub Option<i32>);

/// Resolves the bearer token into an [`AuthUser`] request extension.
///
/// Never rejects a request: missing or invalid tokens yield an anonymous `AuthUser`, and
/// handlers of guarded routes turn that into 401 through [`AuthGuard::require`].
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let user_id = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_token)
        .and_then(|token| match state.tokens.verify(token) {
            Ok(claims) => Some(claims.id),
            Err(e) => {
                tracing::debug!("Rejected bearer token: {}", e);
                None
            }
        });

    req.extensions_mut().insert(AuthUser(user_id));

    next.run(req).await
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    auth: &'a AuthUser,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, auth: &'a AuthUser) -> Self {
        Self { db, auth }
    }

    /// Requires an authenticated user that still exists in the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The authenticated user
    /// - `Err(AuthError::Unauthenticated)` - No valid token on the request
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    pub async fn require(&self) -> Result<entity::user::Model, AppError> {
        let Some(user_id) = self.auth.0 else {
            return Err(AuthError::Unauthenticated.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Resolves the requesting user when present, treating unknown users as anonymous.
    pub async fn optional(&self) -> Result<Option<entity::user::Model>, AppError> {
        let Some(user_id) = self.auth.0 else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }
}

/// Ownership check for mutating a resource.
///
/// # Returns
/// - `Ok(())` - `user_id` is the author
/// - `Err(AuthError::AccessDenied)` - Somebody else wrote the resource
pub fn ensure_author(user_id: i32, author_id: i32, resource: &str) -> Result<(), AuthError> {
    if user_id != author_id {
        return Err(AuthError::AccessDenied(
            user_id,
            format!("You are not the author of this {}", resource),
        ));
    }

    Ok(())
}
