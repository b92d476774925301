//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Token verifier used by the authentication middleware

use sea_orm::DatabaseConnection;

use crate::server::middleware::token::TokenVerifier;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenVerifier` holds the decoding key and validation rules
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer tokens presented in the `Authorization` header.
    pub tokens: TokenVerifier,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Bearer token verifier configured with the shared secret
    pub fn new(db: DatabaseConnection, tokens: TokenVerifier) -> Self {
        Self { db, tokens }
    }
}
