use crate::server::{
    data::group::{GroupRepository, GroupStore},
    model::group::{CreateGroupParam, UpdateGroupParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod add_user;
mod create;
mod delete;
mod get_all;
mod get_by_id;
mod remove_user;
mod update;

/// Counts membership rows for a group.
async fn member_rows(db: &sea_orm::DatabaseConnection, group_id: i32) -> Result<u64, DbErr> {
    entity::prelude::UserGroup::find()
        .filter(entity::user_group::Column::GroupId.eq(group_id))
        .count(db)
        .await
}
