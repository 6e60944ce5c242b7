//! Event data repository for database operations.
//!
//! Event reads come back with attending active users and attending groups (as
//! summaries without their members). Attendance lives in the `event_users` and
//! `event_groups` join tables, both cleared along with the event on delete.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{
        group::find_group,
        user::{find_active_user, load_active_users},
    },
    model::{
        event::{CreateEventParam, Event, UpdateEventParam},
        group::GroupSummary,
        user::User,
    },
};

/// Persistence operations the event service depends on.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Inserts an event and returns its ID.
    async fn create(&self, param: CreateEventParam) -> Result<i32, DbErr>;
    async fn get_by_id(&self, id: i32) -> Result<Event, DbErr>;
    async fn get_all(&self) -> Result<Vec<Event>, DbErr>;
    async fn update(&self, id: i32, param: UpdateEventParam) -> Result<Event, DbErr>;
    async fn delete(&self, id: i32) -> Result<(), DbErr>;
    async fn add_user(&self, event_id: i32, user_id: i32) -> Result<(), DbErr>;
    async fn remove_user(&self, event_id: i32, user_id: i32) -> Result<(), DbErr>;
    async fn add_group(&self, event_id: i32, group_id: i32) -> Result<(), DbErr>;
    async fn remove_group(&self, event_id: i32, group_id: i32) -> Result<(), DbErr>;
}

/// Repository providing database operations for events and their attendance.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches attending users and groups to each event, preserving event order.
    async fn with_relations(&self, events: Vec<entity::event::Model>) -> Result<Vec<Event>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();

        let user_links = entity::prelude::EventUser::find()
            .filter(entity::event_user::Column::EventId.is_in(event_ids.clone()))
            .order_by_asc(entity::event_user::Column::UserId)
            .all(self.db)
            .await?;

        let group_links = entity::prelude::EventGroup::find()
            .filter(entity::event_group::Column::EventId.is_in(event_ids))
            .order_by_asc(entity::event_group::Column::GroupId)
            .all(self.db)
            .await?;

        let users_map =
            load_active_users(self.db, user_links.iter().map(|l| l.user_id).collect()).await?;

        let group_ids: Vec<i32> = group_links.iter().map(|l| l.group_id).collect();
        let groups_map: HashMap<i32, GroupSummary> = if !group_ids.is_empty() {
            entity::prelude::Group::find()
                .filter(entity::group::Column::Id.is_in(group_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.id, GroupSummary::from_entity(g)))
                .collect()
        } else {
            HashMap::new()
        };

        let mut attendees: HashMap<i32, Vec<User>> = HashMap::new();
        for link in user_links {
            if let Some(user) = users_map.get(&link.user_id) {
                attendees.entry(link.event_id).or_default().push(user.clone());
            }
        }

        let mut groups: HashMap<i32, Vec<GroupSummary>> = HashMap::new();
        for link in group_links {
            if let Some(group) = groups_map.get(&link.group_id) {
                groups.entry(link.event_id).or_default().push(group.clone());
            }
        }

        Ok(events
            .into_iter()
            .map(|e| {
                let users = attendees.remove(&e.id).unwrap_or_default();
                let event_groups = groups.remove(&e.id).unwrap_or_default();
                Event::from_entity(e, users, event_groups)
            })
            .collect())
    }

    async fn load_one(&self, event: entity::event::Model) -> Result<Event, DbErr> {
        let id = event.id;
        let mut events = self.with_relations(vec![event]).await?;

        events.pop().ok_or(DbErr::RecordNotFound(format!(
            "Event with id {} not found",
            id
        )))
    }
}

#[async_trait]
impl<'a> EventStore for EventRepository<'a> {
    async fn create(&self, param: CreateEventParam) -> Result<i32, DbErr> {
        let now = Utc::now();

        let entity = entity::event::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            date: ActiveValue::Set(param.date),
            location: ActiveValue::Set(param.location),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(entity.id)
    }

    /// Gets an event by ID with its attending users and groups.
    ///
    /// # Returns
    /// - `Ok(Event)` - The event
    /// - `Err(DbErr::RecordNotFound)` - No event with that ID
    async fn get_by_id(&self, id: i32) -> Result<Event, DbErr> {
        let event = find_event(self.db, id).await?;

        self.load_one(event).await
    }

    /// Gets all events ordered by ID with their attending users and groups.
    async fn get_all(&self) -> Result<Vec<Event>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        self.with_relations(events).await
    }

    /// Applies a partial update to an event.
    ///
    /// A `None` date leaves the stored date untouched.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event with its relations
    /// - `Err(DbErr::RecordNotFound)` - No event with that ID
    async fn update(&self, id: i32, param: UpdateEventParam) -> Result<Event, DbErr> {
        let event = find_event(self.db, id).await?;

        let mut active_model: entity::event::ActiveModel = event.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(date) = param.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(location);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        self.load_one(entity).await
    }

    /// Deletes an event and its attendance links in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Event deleted
    /// - `Err(DbErr::RecordNotFound)` - No event with that ID
    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::EventUser::delete_many()
            .filter(entity::event_user::Column::EventId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::EventGroup::delete_many()
            .filter(entity::event_group::Column::EventId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound(format!(
                "Event with id {} not found",
                id
            )));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Adds a user to an event. Adding an existing attendee is a no-op.
    async fn add_user(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        find_event(self.db, event_id).await?;
        find_active_user(self.db, user_id).await?;

        let existing = entity::prelude::EventUser::find_by_id((event_id, user_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        entity::prelude::EventUser::insert(entity::event_user::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from an event. Removing a non-attendee is a no-op.
    async fn remove_user(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        find_event(self.db, event_id).await?;
        find_active_user(self.db, user_id).await?;

        entity::prelude::EventUser::delete_many()
            .filter(entity::event_user::Column::EventId.eq(event_id))
            .filter(entity::event_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds a group to an event. Adding an attending group again is a no-op.
    async fn add_group(&self, event_id: i32, group_id: i32) -> Result<(), DbErr> {
        find_event(self.db, event_id).await?;
        find_group(self.db, group_id).await?;

        let existing = entity::prelude::EventGroup::find_by_id((event_id, group_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        entity::prelude::EventGroup::insert(entity::event_group::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            group_id: ActiveValue::Set(group_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a group from an event. Removing a non-attending group is a no-op.
    async fn remove_group(&self, event_id: i32, group_id: i32) -> Result<(), DbErr> {
        find_event(self.db, event_id).await?;
        find_group(self.db, group_id).await?;

        entity::prelude::EventGroup::delete_many()
            .filter(entity::event_group::Column::EventId.eq(event_id))
            .filter(entity::event_group::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

async fn find_event<C: ConnectionTrait>(db: &C, id: i32) -> Result<entity::event::Model, DbErr> {
    entity::prelude::Event::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "Event with id {} not found",
            id
        )))
}
