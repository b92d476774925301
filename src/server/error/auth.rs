use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No valid bearer token accompanied a request to a guarded route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is not authenticated")]
    Unauthenticated,

    /// Bearer token failed signature or expiry validation.
    ///
    /// Never returned to clients directly: the authentication middleware treats the
    /// request as anonymous and logs this error at debug level.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token was valid but names a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user attempted to modify a resource they do not own.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing/invalid token or unknown user
/// - 403 Forbidden - Ownership check failed
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthenticated | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not authorized".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, reason) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: reason })).into_response()
            }
        }
    }
}
