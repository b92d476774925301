//! Route table and OpenAPI document.
//!
//! Every handler is registered through `utoipa-axum` so the generated document always
//! matches the mounted routes. The document itself is served at `/api-docs/openapi.json`.

use axum::{middleware, routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{article::*, comment::*, profile::*, tag::*, user::*},
    middleware::auth::authenticate,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Conduit API",
        description = "Blogging platform backend: articles, comments, favorites and follows"
    ),
    tags(
        (name = "article", description = "Articles, feed and favorites"),
        (name = "comment", description = "Comments on articles"),
        (name = "profile", description = "Public profiles and follows"),
        (name = "user", description = "The authenticated user"),
        (name = "tag", description = "Tags used on articles")
    )
)]
pub struct ApiDoc;

/// Builds the application router with authentication, tracing and CORS layers applied.
pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(list_articles, create_article))
        .routes(routes!(get_feed))
        .routes(routes!(get_article, update_article, delete_article))
        .routes(routes!(favorite_article, unfavorite_article))
        .routes(routes!(get_comments, create_comment))
        .routes(routes!(delete_comment))
        .routes(routes!(get_profile))
        .routes(routes!(follow_user, unfollow_user))
        .routes(routes!(get_current_user, update_current_user))
        .routes(routes!(get_tags))
        .split_for_parts();

    api_router
        .route(
            "/api-docs/openapi.json",
            get(move || async move { Json(api) }),
        )
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
