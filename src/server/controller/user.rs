use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UserResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::user::{UpdateUserParams, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the currently authenticated user.
///
/// # Returns
/// - `200 OK` - The user behind the bearer token
/// - `401 Unauthorized` - Missing or invalid token, or the user no longer exists
#[utoipa::path(
    get,
    path = "/api/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let dto = UserResponseDto {
        user: User::from_entity(user).into_dto(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Update the currently authenticated user.
///
/// Only the provided fields change. Username and email must stay unique.
///
/// # Returns
/// - `200 OK` - The updated user
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Blank username or email, or one taken by another user
#[utoipa::path(
    put,
    path = "/api/user",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid or conflicting fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_current_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;
    let params = UpdateUserParams::from_dto(payload.user)?;

    let user = UserService::new(&state.db).update(user, params).await?;

    let dto = UserResponseDto {
        user: user.into_dto(),
    };

    Ok((StatusCode::OK, Json(dto)))
}
