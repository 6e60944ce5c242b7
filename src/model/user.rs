use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::deserialize_non_empty;

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UsersDto {
    pub users: Vec<UserDto>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UserEnvelopeDto {
    pub user: UserDto,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 5))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserDto {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 6))]
    pub password: String,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 5))]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 6))]
    pub password: Option<String>,
}
