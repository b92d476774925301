//! Bearer token minting for tests.
//!
//! The server only verifies tokens, so tests mint their own with the same secret and
//! claim shape (`{id, exp}`) that the authentication middleware expects.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use crate::error::TestError;

/// Secret shared between test servers and minted tokens.
pub const TEST_JWT_SECRET: &str = "conduit-test-secret";

/// Mints an HS256 token for `user_id` signed with `secret`, valid for one hour.
pub fn token_for(user_id: i32, secret: &str) -> Result<String, TestError> {
    let exp = (Utc::now() + Duration::hours(1)).timestamp();
    let claims = json!({ "id": user_id, "exp": exp });

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Mints a token already past its expiry.
pub fn expired_token_for(user_id: i32, secret: &str) -> Result<String, TestError> {
    let exp = (Utc::now() - Duration::hours(1)).timestamp();
    let claims = json!({ "id": user_id, "exp": exp });

    Ok(encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?)
}

/// Formats the `Authorization` header value for `user_id` using the test secret.
pub fn auth_header(user_id: i32) -> Result<String, TestError> {
    Ok(format!("Token {}", token_for(user_id, TEST_JWT_SECRET)?))
}
