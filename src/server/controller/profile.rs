use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{api::ErrorDto, profile::ProfileResponseDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::user::Profile,
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Tag for grouping profile endpoints in OpenAPI documentation
pub static PROFILE_TAG: &str = "profile";

fn envelope(profile: Profile) -> Json<ProfileResponseDto> {
    Json(ProfileResponseDto {
        profile: profile.into_dto(),
    })
}

/// Get a user's public profile.
#[utoipa::path(
    get,
    path = "/api/profiles/{username}",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "The profile", body = ProfileResponseDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &auth).optional().await?;

    let profile = ProfileService::new(&state.db)
        .get(&username, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, envelope(profile)))
}

/// Follow a user.
///
/// # Returns
/// - `200 OK` - Profile with `following` true
/// - `400 Bad Request` - Attempt to follow oneself
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Unknown username
#[utoipa::path(
    post,
    path = "/api/profiles/{username}/follow",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Username to follow")
    ),
    responses(
        (status = 200, description = "Now following", body = ProfileResponseDto),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let profile = ProfileService::new(&state.db)
        .follow(&username, user.id)
        .await?;

    Ok((StatusCode::OK, envelope(profile)))
}

/// Stop following a user.
#[utoipa::path(
    delete,
    path = "/api/profiles/{username}/follow",
    tag = PROFILE_TAG,
    params(
        ("username" = String, Path, description = "Username to unfollow")
    ),
    responses(
        (status = 200, description = "No longer following", body = ProfileResponseDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfollow_user(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(username): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let profile = ProfileService::new(&state.db)
        .unfollow(&username, user.id)
        .await?;

    Ok((StatusCode::OK, envelope(profile)))
}
