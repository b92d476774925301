//! HTTP request handlers.
//!
//! Controllers resolve the requesting user through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert request DTOs into validated parameters, call a service and wrap the returned
//! domain model in its response envelope.

pub mod article;
pub mod comment;
pub mod profile;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
