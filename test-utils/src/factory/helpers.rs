//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a user to a group directly through the join table.
pub async fn add_user_to_group(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
) -> Result<entity::user_group::Model, DbErr> {
    entity::user_group::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}

/// Links a user to an event directly through the join table.
pub async fn add_user_to_event(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_user::Model, DbErr> {
    entity::event_user::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}

/// Links a group to an event directly through the join table.
pub async fn add_group_to_event(
    db: &DatabaseConnection,
    event_id: i32,
    group_id: i32,
) -> Result<entity::event_group::Model, DbErr> {
    entity::event_group::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        group_id: ActiveValue::Set(group_id),
    }
    .insert(db)
    .await
}
