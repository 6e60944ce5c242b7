//! Group domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::group::{GroupDto, GroupSummaryDto},
    server::model::user::User,
};

/// A group together with its active members.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub users: Vec<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Converts an entity model plus its loaded members into the domain model.
    pub fn from_entity(entity: entity::group::Model, users: Vec<User>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            users,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            users: self.users.into_iter().map(User::into_dto).collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A group as embedded in an event, without members.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl GroupSummary {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GroupSummaryDto {
        GroupSummaryDto {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParam {
    pub name: Option<String>,
}
