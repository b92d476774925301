//! Conduit Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the conduit
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Entity factories inserting rows with sensible defaults
//! - **token**: Bearer token minting for exercising authenticated routes
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_article_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_conduit_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_user(db).await?;
//!     let article = factory::create_article(db, author.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod token;
