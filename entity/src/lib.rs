//! SeaORM entities for the eventboard schema.

pub mod prelude;

pub mod event;
pub mod event_group;
pub mod event_user;
pub mod group;
pub mod user;
pub mod user_group;
