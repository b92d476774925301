use crate::server::data::tag::TagRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete_names;
mod get_all;
mod record;
