use crate::server::{
    data::article::ArticleRepository,
    model::article::{ArticleQuery, CreateArticleParams, Pagination, UpdateArticleParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{
    builder::TestBuilder,
    factory::{self, article::ArticleFactory},
};

mod create;
mod delete;
mod list;
mod tag_in_use;
mod update;
