use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CreateCommentDto, MultipleCommentsDto, SingleCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::comment::{Comment, CreateCommentParams},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Add a comment to an article.
///
/// # Access Control
/// - Requires a valid bearer token; the requester becomes the author
///
/// # Returns
/// - `201 Created` - The new comment
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Unknown article or blank body
#[utoipa::path(
    post,
    path = "/api/articles/{slug}/comments",
    tag = COMMENT_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = SingleCommentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Unknown article or blank body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let params = CreateCommentParams::from_dto(user.id, payload.comment)?;
    let comment = CommentService::new(&state.db).create(&slug, params).await?;

    Ok((StatusCode::CREATED, Json(comment.into_single_dto())))
}

/// List the comments of an article in the order they were written.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}/comments",
    tag = COMMENT_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Comments of the article", body = MultipleCommentsDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &auth).optional().await?;

    let comments = CommentService::new(&state.db)
        .list(&slug, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(Comment::into_multiple_dto(comments))))
}

/// Delete a comment.
///
/// # Access Control
/// - Requires a valid bearer token of the comment's author
///
/// # Returns
/// - `200 OK` - Comment deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Requester did not write the comment
/// - `404 Not Found` - Unknown article or comment
#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/comments/{id}",
    tag = COMMENT_TAG,
    params(
        ("slug" = String, Path, description = "Article slug"),
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Article or comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((slug, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    CommentService::new(&state.db)
        .delete(&slug, id, user.id)
        .await?;

    Ok(StatusCode::OK)
}
