//! User service for business logic.
//!
//! Handles registration, credential checks and partial updates. Passwords are hashed
//! here, before they reach the store. Email uniqueness among users that are not
//! deleted is checked here and backed by a partial unique index, whose violation is
//! reported the same way.

use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::{
        data::user::UserStore,
        error::{auth::AuthError, AppError, OrConflict},
        model::user::{CreateUserParam, UpdateUserParam, User},
        util::password::hash_password_blocking,
    },
};

const EMAIL_TAKEN: &str = "A user with this email already exists";

/// Service providing business logic for user management.
pub struct UserService<S: UserStore> {
    store: S,
}

impl<S: UserStore> UserService<S> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `store` - Backing user store, typically a `UserRepository`
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Registers a new user.
    ///
    /// # Arguments
    /// - `dto` - Validated registration request
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already used by an active user
    /// - `Err(AppError::PasswordHash)` - Hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, dto: CreateUserDto) -> Result<User, AppError> {
        self.ensure_email_free(&dto.email, None).await?;

        let password_hash = hash_password_blocking(dto.password).await?;

        let user = self
            .store
            .create(CreateUserParam {
                username: dto.username,
                email: dto.email,
                password_hash,
            })
            .await
            .or_conflict(EMAIL_TAKEN)?;

        Ok(user)
    }

    /// Checks a login attempt.
    ///
    /// # Returns
    /// - `Ok(i32)` - ID of the authenticated user
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown email or wrong password
    pub async fn login(&self, email: &str, password: &str) -> Result<i32, AppError> {
        self.store
            .verify_credentials(email, password)
            .await?
            .ok_or_else(|| AuthError::InvalidCredentials.into())
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(self.store.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Applies a partial update to a user.
    ///
    /// A supplied password is hashed before it is stored. Changing the email to one
    /// held by another active user is rejected.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::BadRequest)` - New email already in use
    /// - `Err(AppError::DbErr(RecordNotFound))` - No active user with that ID
    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        if let Some(email) = &dto.email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        let password_hash = match dto.password {
            Some(password) => Some(hash_password_blocking(password).await?),
            None => None,
        };

        let user = self
            .store
            .update(
                id,
                UpdateUserParam {
                    username: dto.username,
                    email: dto.email,
                    password_hash,
                },
            )
            .await
            .or_conflict(EMAIL_TAKEN)?;

        Ok(user)
    }

    /// Soft-deletes a user.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(self.store.delete(id).await?)
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i32>) -> Result<(), AppError> {
        match self.store.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(AppError::BadRequest(EMAIL_TAKEN.to_string()))
            }
            _ => Ok(()),
        }
    }
}
