//! Tag data repository.
//!
//! Keeps the set of distinct tag names used on articles for `GET /tags`. Names are
//! recorded when an article gains them and removed once no article lists them anymore.

use std::collections::BTreeSet;

use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct TagRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TagRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records tag names, ignoring ones that are already known.
    pub async fn record(&self, names: &[String]) -> Result<(), DbErr> {
        let unique: BTreeSet<&str> = names.iter().map(String::as_str).collect();
        if unique.is_empty() {
            return Ok(());
        }

        let models = unique.into_iter().map(|name| entity::tag::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        });

        entity::prelude::Tag::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::tag::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Removes the given tag names; returns how many rows were deleted.
    pub async fn delete_names(&self, names: &[String]) -> Result<u64, DbErr> {
        if names.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Tag::delete_many()
            .filter(entity::tag::Column::Name.is_in(names.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// All tag names sorted alphabetically.
    pub async fn get_all(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Tag::find()
            .select_only()
            .column(entity::tag::Column::Name)
            .order_by_asc(entity::tag::Column::Name)
            .into_tuple()
            .all(self.db)
            .await
    }
}
