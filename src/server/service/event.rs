//! Event service for business logic.
//!
//! Event dates arrive as text and are parsed here with [`parse_event_date`] before
//! the store is touched, so a bad date never causes a write.

use crate::{
    model::event::{CreateEventDto, UpdateEventDto},
    server::{
        data::event::EventStore,
        error::AppError,
        model::event::{parse_event_date, CreateEventParam, Event, UpdateEventParam},
    },
};

/// Service providing business logic for events and their attendance.
pub struct EventService<S: EventStore> {
    store: S,
}

impl<S: EventStore> EventService<S> {
    /// Creates a new EventService instance.
    ///
    /// # Arguments
    /// - `store` - Backing event store, typically an `EventRepository`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates an event and returns it fully loaded.
    ///
    /// # Returns
    /// - `Ok(Event)` - The stored event as read back from the store
    /// - `Err(AppError::InvalidDateFormat)` - Date is neither RFC 3339 nor `YYYY-MM-DD`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, dto: CreateEventDto) -> Result<Event, AppError> {
        let date = parse_event_date(&dto.date)?;

        let id = self
            .store
            .create(CreateEventParam {
                name: dto.name,
                description: dto.description,
                date,
                location: dto.location,
            })
            .await?;

        Ok(self.store.get_by_id(id).await?)
    }

    pub async fn get_all(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Applies a partial update to an event.
    ///
    /// A missing date leaves the stored date unchanged.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(AppError::InvalidDateFormat)` - Supplied date could not be parsed
    /// - `Err(AppError::DbErr(RecordNotFound))` - No event with that ID
    pub async fn update(&self, id: i32, dto: UpdateEventDto) -> Result<Event, AppError> {
        let date = dto.date.as_deref().map(parse_event_date).transpose()?;

        Ok(self
            .store
            .update(
                id,
                UpdateEventParam {
                    name: dto.name,
                    description: dto.description,
                    date,
                    location: dto.location,
                },
            )
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(self.store.delete(id).await?)
    }

    pub async fn add_user(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        Ok(self.store.add_user(event_id, user_id).await?)
    }

    pub async fn remove_user(&self, event_id: i32, user_id: i32) -> Result<(), AppError> {
        Ok(self.store.remove_user(event_id, user_id).await?)
    }

    pub async fn add_group(&self, event_id: i32, group_id: i32) -> Result<(), AppError> {
        Ok(self.store.add_group(event_id, group_id).await?)
    }

    pub async fn remove_group(&self, event_id: i32, group_id: i32) -> Result<(), AppError> {
        Ok(self.store.remove_group(event_id, group_id).await?)
    }
}
