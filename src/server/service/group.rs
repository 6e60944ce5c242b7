//! Group service for business logic.
//!
//! Thin layer over the group store that enforces unique group names. The check runs
//! before writes, and a unique constraint violation from a concurrent write is
//! reported the same way.

use crate::{
    model::group::{CreateGroupDto, UpdateGroupDto},
    server::{
        data::group::GroupStore,
        error::{AppError, OrConflict},
        model::group::{CreateGroupParam, Group, UpdateGroupParam},
    },
};

const NAME_TAKEN: &str = "A group with this name already exists";

/// Service providing business logic for groups and memberships.
pub struct GroupService<S: GroupStore> {
    store: S,
}

impl<S: GroupStore> GroupService<S> {
    /// Creates a new GroupService instance.
    ///
    /// # Arguments
    /// - `store` - Backing group store, typically a `GroupRepository`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group, without members
    /// - `Err(AppError::BadRequest)` - Name already taken
    pub async fn create(&self, dto: CreateGroupDto) -> Result<Group, AppError> {
        self.ensure_name_free(&dto.name, None).await?;

        Ok(self
            .store
            .create(CreateGroupParam { name: dto.name })
            .await
            .or_conflict(NAME_TAKEN)?)
    }

    pub async fn get_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Group, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Renames a group when a name is supplied.
    ///
    /// # Returns
    /// - `Ok(Group)` - The updated group with members
    /// - `Err(AppError::BadRequest)` - Name held by a different group
    /// - `Err(AppError::DbErr(RecordNotFound))` - No group with that ID
    pub async fn update(&self, id: i32, dto: UpdateGroupDto) -> Result<Group, AppError> {
        if let Some(name) = &dto.name {
            self.ensure_name_free(name, Some(id)).await?;
        }

        Ok(self
            .store
            .update(id, UpdateGroupParam { name: dto.name })
            .await
            .or_conflict(NAME_TAKEN)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(self.store.delete(id).await?)
    }

    pub async fn add_user(&self, group_id: i32, user_id: i32) -> Result<(), AppError> {
        Ok(self.store.add_user(group_id, user_id).await?)
    }

    pub async fn remove_user(&self, group_id: i32, user_id: i32) -> Result<(), AppError> {
        Ok(self.store.remove_user(group_id, user_id).await?)
    }

    async fn ensure_name_free(&self, name: &str, owner: Option<i32>) -> Result<(), AppError> {
        match self.store.find_by_name(name).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(AppError::BadRequest(NAME_TAKEN.to_string()))
            }
            _ => Ok(()),
        }
    }
}
