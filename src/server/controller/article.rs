use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        article::{CreateArticleDto, MultipleArticlesDto, SingleArticleDto, UpdateArticleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthUser},
        model::article::{ArticleFilter, CreateArticleParams, Pagination, UpdateArticleParams},
        service::{article::ArticleService, favorite::FavoriteService},
        state::AppState,
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Filters accepted by `GET /api/articles`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListArticlesQuery {
    /// Only articles whose tag list contains this tag
    pub tag: Option<String>,
    /// Only articles written by this username
    pub author: Option<String>,
    /// Only articles favorited by this username
    pub favorited: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl From<ListArticlesQuery> for ArticleFilter {
    fn from(query: ListArticlesQuery) -> Self {
        Self {
            tag: query.tag,
            author: query.author,
            favorited: query.favorited,
            pagination: Pagination {
                limit: query.limit,
                offset: query.offset,
            },
        }
    }
}

/// Pagination accepted by `GET /api/articles/feed`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeedQuery {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// List articles.
///
/// Returns articles newest first, optionally filtered by tag, author or the user who
/// favorited them. Anonymous access is allowed; `favorited` and `following` flags are
/// relative to the requesting user when a valid token is present.
///
/// # Returns
/// - `200 OK` - Page of articles and the total number of matches
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(ListArticlesQuery),
    responses(
        (status = 200, description = "Matching articles", body = MultipleArticlesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<ListArticlesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &auth).optional().await?;

    let page = ArticleService::new(&state.db)
        .list(query.into(), viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Feed of articles by followed authors.
///
/// # Access Control
/// - Requires a valid bearer token
///
/// # Returns
/// - `200 OK` - Articles by followed users, newest first; empty when following nobody
/// - `401 Unauthorized` - Missing or invalid token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/feed",
    tag = ARTICLE_TAG,
    params(FeedQuery),
    responses(
        (status = 200, description = "Articles by followed users", body = MultipleArticlesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_feed(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Query(query): Query<FeedQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let pagination = Pagination {
        limit: query.limit,
        offset: query.offset,
    };
    let page = ArticleService::new(&state.db)
        .feed(user.id, pagination)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Create an article.
///
/// The slug is derived from the title plus a random suffix; tags default to none.
///
/// # Access Control
/// - Requires a valid bearer token; the requester becomes the author
///
/// # Returns
/// - `201 Created` - The new article
/// - `401 Unauthorized` - Missing or invalid token
/// - `422 Unprocessable Entity` - Missing title, description or body, or invalid tag
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = CreateArticleDto,
    responses(
        (status = 201, description = "Article created", body = SingleArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid article", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_article(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<CreateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let params = CreateArticleParams::from_dto(user.id, payload.article)?;
    let article = ArticleService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(article.into_single_dto())))
}

/// Get a single article by slug.
#[utoipa::path(
    get,
    path = "/api/articles/{slug}",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "The article", body = SingleArticleDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &auth).optional().await?;

    let article = ArticleService::new(&state.db)
        .get_by_slug(&slug, viewer.map(|u| u.id))
        .await?;

    Ok((StatusCode::OK, Json(article.into_single_dto())))
}

/// Update an article.
///
/// Only the provided fields change; the slug stays the same even when the title changes.
///
/// # Access Control
/// - Requires a valid bearer token of the article's author
///
/// # Returns
/// - `200 OK` - The updated article
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Requester is not the author
/// - `404 Not Found` - No article with that slug
/// - `422 Unprocessable Entity` - A provided field is blank or a tag is invalid
#[utoipa::path(
    put,
    path = "/api/articles/{slug}",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    request_body = UpdateArticleDto,
    responses(
        (status = 200, description = "Article updated", body = SingleArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 422, description = "Invalid changes", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_article(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let params = UpdateArticleParams::from_dto(payload.article)?;
    let article = ArticleService::new(&state.db)
        .update(&slug, user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(article.into_single_dto())))
}

/// Delete an article together with its comments and favorites.
///
/// # Access Control
/// - Requires a valid bearer token of the article's author
///
/// # Returns
/// - `200 OK` - Article deleted
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Requester is not the author
/// - `404 Not Found` - No article with that slug
#[utoipa::path(
    delete,
    path = "/api/articles/{slug}",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    ArticleService::new(&state.db).delete(&slug, user.id).await?;

    Ok(StatusCode::OK)
}

/// Favorite an article. Favoriting twice has no further effect.
#[utoipa::path(
    post,
    path = "/api/articles/{slug}/favorite",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article favorited", body = SingleArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn favorite_article(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let article = FavoriteService::new(&state.db)
        .favorite(&slug, user.id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_single_dto())))
}

/// Remove an article from the requester's favorites.
#[utoipa::path(
    delete,
    path = "/api/articles/{slug}/favorite",
    tag = ARTICLE_TAG,
    params(
        ("slug" = String, Path, description = "Article slug")
    ),
    responses(
        (status = 200, description = "Article unfavorited", body = SingleArticleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfavorite_article(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &auth).require().await?;

    let article = FavoriteService::new(&state.db)
        .unfavorite(&slug, user.id)
        .await?;

    Ok((StatusCode::OK, Json(article.into_single_dto())))
}
