use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::{deserialize_non_empty, user::UserDto};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub users: Vec<UserDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Group as embedded in other payloads, without its members.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct GroupSummaryDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGroupDto {
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateGroupDto {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub name: Option<String>,
}
