//! Request processing middleware and authentication guards.
//!
//! - `token` verifies bearer tokens and resolves them to a user id
//! - `auth` injects the resolved id into each request and provides the guards that
//!   handlers use to require an authenticated user or check resource ownership

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
