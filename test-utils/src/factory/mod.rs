//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with a `Factory`
//! struct for customization and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_user(db).await?;
//! let article = factory::create_article(db, author.id).await?;
//! let (reader, article) = factory::helpers::create_article_with_reader(db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(db, author.id)
//!     .title("Dragons")
//!     .tags(["dragons", "coffee"])
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod favorite;
pub mod follow;
pub mod helpers;
pub mod user;

pub use article::create_article;
pub use comment::create_comment;
pub use favorite::create_favorite;
pub use follow::create_follow;
pub use user::create_user;
