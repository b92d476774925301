use crate::server::{data::user::UserRepository, model::user::UpdateUserParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_email;
mod find_by_ids;
mod find_by_username;
mod update;
