pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_article_table;
mod m20261001_000003_create_comment_table;
mod m20261001_000004_create_follow_table;
mod m20261001_000005_create_favorite_table;
mod m20261001_000006_create_tag_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_article_table::Migration),
            Box::new(m20261001_000003_create_comment_table::Migration),
            Box::new(m20261001_000004_create_follow_table::Migration),
            Box::new(m20261001_000005_create_favorite_table::Migration),
            Box::new(m20261001_000006_create_tag_table::Migration),
        ]
    }
}
