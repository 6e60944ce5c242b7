use crate::server::{
    data::user::{UserRepository, UserStore},
    model::user::{CreateUserParam, UpdateUserParam},
    util::password::hash_password,
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_email;
mod get_all;
mod get_by_id;
