//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an author, an article written by them and a second user acting as reader.
///
/// # Returns
/// - `Ok((author, reader, article))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_article_with_reader(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::article::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let reader = crate::factory::user::create_user(db).await?;
    let article = crate::factory::article::create_article(db, author.id).await?;

    Ok((author, reader, article))
}
