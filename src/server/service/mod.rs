//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, self-follow rejection, unique usernames and
//!   emails, and slug generation
//! - **Orchestration**: Resolving usernames and viewer-relative flags across repositories
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Favorite toggles, article creation and deletion each run
//!   inside a single transaction

pub mod article;
pub mod comment;
pub mod favorite;
pub mod profile;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
