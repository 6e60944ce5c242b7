use crate::server::{
    data::event::{EventRepository, EventStore},
    model::event::{CreateEventParam, UpdateEventParam},
};
use chrono::{TimeZone, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod associations;
mod create;
mod delete;
mod get;
