//! User data repository for database operations.
//!
//! Users are soft-deleted: `deleted_at` is set instead of removing the row, and every
//! read in this module filters deleted users out. Their join rows stay in place but
//! never surface in group or event payloads, which load members through
//! [`load_active_users`].

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::user::{CreateUserParam, UpdateUserParam, User},
    util::password::verify_password_blocking,
};

/// Persistence operations the user service depends on.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create(&self, param: CreateUserParam) -> Result<User, DbErr>;
    async fn get_by_id(&self, id: i32) -> Result<User, DbErr>;
    async fn get_all(&self) -> Result<Vec<User>, DbErr>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr>;
    async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr>;
    async fn delete(&self, id: i32) -> Result<(), DbErr>;
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<i32>, DbErr>;
}

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_active(&self, id: i32) -> Result<entity::user::Model, DbErr> {
        find_active_user(self.db, id).await
    }
}

#[async_trait]
impl<'a> UserStore for UserRepository<'a> {
    /// Inserts a new user with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert
    async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            deleted_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Gets an active user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(DbErr::RecordNotFound)` - No user with that ID, or the user is deleted
    async fn get_by_id(&self, id: i32) -> Result<User, DbErr> {
        Ok(User::from_entity(self.find_active(id).await?))
    }

    /// Gets all active users ordered by ID.
    async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let users = entity::prelude::User::find()
            .filter(entity::user::Column::DeletedAt.is_null())
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(User::from_entity).collect())
    }

    /// Finds an active user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let user = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .filter(entity::user::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(user.map(User::from_entity))
    }

    /// Applies a partial update to an active user.
    ///
    /// Only fields present in `param` are written; `updated_at` is always refreshed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotFound)` - No active user with that ID
    async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let user = self.find_active(id).await?;

        let mut active_model: entity::user::ActiveModel = user.into();
        if let Some(username) = param.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = param.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Soft-deletes a user by stamping `deleted_at`.
    ///
    /// # Returns
    /// - `Ok(())` - User marked deleted
    /// - `Err(DbErr::RecordNotFound)` - No active user with that ID
    async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let now = Utc::now();

        let result = entity::prelude::User::update_many()
            .col_expr(entity::user::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::user::Column::UpdatedAt, Expr::value(now))
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "User with id {} not found",
                id
            )));
        }

        Ok(())
    }

    /// Checks an email and plaintext password against active users.
    ///
    /// # Returns
    /// - `Ok(Some(id))` - Credentials match
    /// - `Ok(None)` - Unknown email or wrong password, indistinguishably
    /// - `Err(DbErr::Custom)` - The verification task failed
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<i32>, DbErr> {
        let user = self.find_by_email(email).await?;

        // Unknown emails still run one Argon2 verification
        let hash = user.as_ref().map(|u| u.password_hash.clone());
        let matches = verify_password_blocking(password.to_string(), hash)
            .await
            .map_err(|e| DbErr::Custom(format!("Password verification task failed: {}", e)))?;

        Ok(user.filter(|_| matches).map(|u| u.id))
    }
}

/// Loads active users by ID in one query.
///
/// Deleted or unknown IDs are simply absent from the returned map.
pub(super) async fn load_active_users<C: ConnectionTrait>(
    db: &C,
    user_ids: Vec<i32>,
) -> Result<HashMap<i32, User>, DbErr> {
    if user_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(user_ids))
        .filter(entity::user::Column::DeletedAt.is_null())
        .all(db)
        .await?;

    Ok(users
        .into_iter()
        .map(|u| (u.id, User::from_entity(u)))
        .collect())
}

/// Fetches a user that exists and is not deleted.
pub(super) async fn find_active_user<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<entity::user::Model, DbErr> {
    entity::prelude::User::find_by_id(id)
        .filter(entity::user::Column::DeletedAt.is_null())
        .one(db)
        .await?
        .ok_or(DbErr::RecordNotFound(format!(
            "User with id {} not found",
            id
        )))
}
