use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{ensure_author, AuthGuard, AuthUser},
};
use test_utils::{builder::TestBuilder, factory};
