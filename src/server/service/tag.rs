use sea_orm::DatabaseConnection;

use crate::server::{data::tag::TagRepository, error::AppError};

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Every tag used on an article, sorted by name.
    pub async fn get_all(&self) -> Result<Vec<String>, AppError> {
        Ok(TagRepository::new(self.db).get_all().await?)
    }
}
