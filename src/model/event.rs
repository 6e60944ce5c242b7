use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{deserialize_non_empty, group::GroupSummaryDto, user::UserDto};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub users: Vec<UserDto>,
    pub groups: Vec<GroupSummaryDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event creation request. `date` accepts RFC 3339 or `YYYY-MM-DD`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEventDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(length(min = 1))]
    pub date: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateEventDto {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub location: Option<String>,
}
