//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories return SeaORM entity models; services combine
//! them into domain models. Every repository is generic over [`sea_orm::ConnectionTrait`]
//! so the same code runs against the pool or inside a transaction.

pub mod article;
pub mod comment;
pub mod favorite;
pub mod follow;
pub mod tag;
pub mod user;

#[cfg(test)]
mod test;
