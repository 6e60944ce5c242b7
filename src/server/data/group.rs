//! Group data repository for database operations.
//!
//! Group reads come back with their active members loaded. Membership lives in the
//! `user_groups` join table, which is cleared along with the group on delete.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::{find_active_user, load_active_users},
    model::{
        group::{CreateGroupParam, Group, GroupSummary, UpdateGroupParam},
        user::User,
    },
};

/// Persistence operations the group service depends on.
#[async_trait]
pub trait GroupStore: Send + Sync {
    async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr>;
    async fn get_by_id(&self, id: i32) -> Result<Group, DbErr>;
    async fn get_all(&self) -> Result<Vec<Group>, DbErr>;
    async fn find_by_name(&self, name: &str) -> Result<Option<GroupSummary>, DbErr>;
    async fn update(&self, id: i32, param: UpdateGroupParam) -> Result<Group, DbErr>;
    async fn delete(&self, id: i32) -> Result<(), DbErr>;
    async fn add_user(&self, group_id: i32, user_id: i32) -> Result<(), DbErr>;
    async fn remove_user(&self, group_id: i32, user_id: i32) -> Result<(), DbErr>;
}

/// Repository providing database operations for groups and their memberships.
pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    /// Creates a new GroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `GroupRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches active members to each group, preserving group order.
    async fn with_users(&self, groups: Vec<entity::group::Model>) -> Result<Vec<Group>, DbErr> {
        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let links = entity::prelude::UserGroup::find()
            .filter(entity::user_group::Column::GroupId.is_in(group_ids))
            .order_by_asc(entity::user_group::Column::UserId)
            .all(self.db)
            .await?;

        let users_map = load_active_users(self.db, links.iter().map(|l| l.user_id).collect()).await?;

        let mut members: HashMap<i32, Vec<User>> = HashMap::new();
        for link in links {
            if let Some(user) = users_map.get(&link.user_id) {
                members
                    .entry(link.group_id)
                    .or_default()
                    .push(user.clone());
            }
        }

        Ok(groups
            .into_iter()
            .map(|g| {
                let users = members.remove(&g.id).unwrap_or_default();
                Group::from_entity(g, users)
            })
            .collect())
    }
}

#[async_trait]
impl<'a> GroupStore for GroupRepository<'a> {
    /// Inserts a new group with no members.
    async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let now = Utc::now();

        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity, Vec::new()))
    }

    /// Gets a group by ID with its active members.
    ///
    /// # Returns
    /// - `Ok(Group)` - The group
    /// - `Err(DbErr::RecordNotFound)` - No group with that ID
    async fn get_by_id(&self, id: i32) -> Result<Group, DbErr> {
        let group = find_group(self.db, id).await?;

        let mut groups = self.with_users(vec![group]).await?;
        groups.pop().ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found",
            id
        )))
    }

    /// Gets all groups ordered by ID, each with its active members.
    async fn get_all(&self) -> Result<Vec<Group>, DbErr> {
        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?;

        self.with_users(groups).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<GroupSummary>, DbErr> {
        let group = entity::prelude::Group::find()
            .filter(entity::group::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(group.map(GroupSummary::from_entity))
    }

    /// Applies a partial update to a group.
    ///
    /// # Returns
    /// - `Ok(Group)` - The updated group with its members
    /// - `Err(DbErr::RecordNotFound)` - No group with that ID
    async fn update(&self, id: i32, param: UpdateGroupParam) -> Result<Group, DbErr> {
        let group = find_group(self.db, id).await?;

        let mut active_model: entity::group::ActiveModel = group.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        let mut groups = self.with_users(vec![entity]).await?;
        groups.pop().ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found after update",
            id
        )))
    }

    /// Deletes a group and its membership and event links in one transaction.
    ///
    /// # Returns
    /// - `Ok(())` - Group deleted
    /// - `Err(DbErr::RecordNotFound)` - No group with that ID
    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::EventGroup::delete_many()
            .filter(entity::event_group::Column::GroupId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Group::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound(format!(
                "Group with id {} not found",
                id
            )));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Adds a user to a group. Adding an existing member is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - User is a member
    /// - `Err(DbErr::RecordNotFound)` - Group or active user missing
    async fn add_user(&self, group_id: i32, user_id: i32) -> Result<(), DbErr> {
        find_group(self.db, group_id).await?;
        find_active_user(self.db, user_id).await?;

        let existing = entity::prelude::UserGroup::find_by_id((user_id, group_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        entity::prelude::UserGroup::insert(entity::user_group::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            group_id: ActiveValue::Set(group_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user from a group. Removing a non-member is a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - User is not a member
    /// - `Err(DbErr::RecordNotFound)` - Group or active user missing
    async fn remove_user(&self, group_id: i32, user_id: i32) -> Result<(), DbErr> {
        find_group(self.db, group_id).await?;
        find_active_user(self.db, user_id).await?;

        entity::prelude::UserGroup::delete_many()
            .filter(entity::user_group::Column::GroupId.eq(group_id))
            .filter(entity::user_group::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

pub(super) async fn find_group<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::group::Model, DbErr> {
    entity::prelude::Group::find_by_id(id)
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "Group with id {} not found",
            id
        )))
}
