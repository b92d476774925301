//! Bearer token verification.
//!
//! Tokens are HS256 JWTs carrying the user id. Issuing them is the job of an external
//! identity service sharing `JWT_SECRET`; this server only verifies them.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::auth::AuthError;

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Id of the authenticated user.
    pub id: i32,
    /// Expiry as a Unix timestamp.
    pub exp: usize,
}

/// Verifies bearer tokens signed with the shared secret.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for HS256 tokens signed with `secret`.
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Validates signature and expiry and returns the token claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;

        Ok(data.claims)
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// Accepts both the `Token <jwt>` scheme used by Conduit clients and `Bearer <jwt>`.
pub fn extract_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some("Token") | Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}
