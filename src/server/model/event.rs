//! Event domain models, parameters and date parsing.
//!
//! Event dates arrive as text in one of two shapes: a full RFC 3339 timestamp
//! (`2025-06-01T18:30:00Z`, `2025-06-01T18:30:00+02:00`) or a bare calendar date
//! (`2025-06-01`), which is taken as midnight UTC. Everything is stored in UTC.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::event::EventDto,
    server::{
        error::AppError,
        model::{group::GroupSummary, user::User},
    },
};

/// An event with its attending users and groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub users: Vec<User>,
    pub groups: Vec<GroupSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an entity model plus its loaded associations into the domain model.
    pub fn from_entity(
        entity: entity::event::Model,
        users: Vec<User>,
        groups: Vec<GroupSummary>,
    ) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            date: entity.date,
            location: entity.location,
            users,
            groups,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            description: self.description,
            date: self.date,
            location: self.location,
            users: self.users.into_iter().map(User::into_dto).collect(),
            groups: self.groups.into_iter().map(GroupSummary::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEventParam {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
}

/// Parameters for a partial event update.
///
/// `date: None` keeps the stored date.
#[derive(Debug, Clone, Default)]
pub struct UpdateEventParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
}

/// Parses an event date from RFC 3339 or `YYYY-MM-DD`.
///
/// RFC 3339 is tried first. A bare date resolves to midnight UTC.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The parsed instant
/// - `Err(AppError::InvalidDateFormat)` - Neither format matched
pub fn parse_event_date(value: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
        .ok_or(AppError::InvalidDateFormat)
}
