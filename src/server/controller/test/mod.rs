use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    context::TestContext,
    factory,
    token::{auth_header, expired_token_for, TEST_JWT_SECRET},
};

use crate::server::{middleware::token::TokenVerifier, router::router, state::AppState};


/// Router under test plus the database it serves.
///
/// The context owns the in-memory database and must outlive the server.
struct TestApp {
    _context: TestContext,
    db: DatabaseConnection,
    server: TestServer,
}

async fn spawn_app() -> TestApp {
    let context = TestBuilder::new()
        .with_conduit_tables()
        .build()
        .await
        .unwrap();
    let db = context.db.clone().unwrap();

    let state = AppState::new(db.clone(), TokenVerifier::new(TEST_JWT_SECRET));
    let server = TestServer::new(router(state)).unwrap();

    TestApp {
        _context: context,
        db,
        server,
    }
}
