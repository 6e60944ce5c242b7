use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        user::{
            CreateUserDto, LoginUserDto, TokenDto, UpdateUserDto, UserEnvelopeDto, UsersDto,
        },
    },
    server::{
        controller::extract::ValidatedJson,
        data::user::UserRepository,
        error::{AppError, OrNotFound},
        middleware::auth::AuthUser,
        model::user::User,
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Registers a new user and returns a bearer token for them.
///
/// # Arguments
/// - `state` - Application state containing the database connection and token keys
/// - `payload` - Username (min 5), email and password (min 6)
///
/// # Returns
/// - `201 Created` - `{token}` for the new user
/// - `400 Bad Request` - Invalid body or email already registered
/// - `500 Internal Server Error` - Database, hashing or signing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = TokenDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(UserRepository::new(&state.db))
        .create(payload)
        .await?;

    let token = state.token_keys.issue(user.id)?;

    tracing::info!("Registered user {}", user.id);

    Ok((StatusCode::CREATED, Json(TokenDto { token })))
}

/// Exchanges email and password for a bearer token.
///
/// # Returns
/// - `200 OK` - `{token}` valid for one hour
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Invalid login data", body = ValidationErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = UserService::new(UserRepository::new(&state.db))
        .login(&payload.email, &payload.password)
        .await?;

    let token = state.token_keys.issue(user_id)?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All active users", body = UsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(UserRepository::new(&state.db))
        .get_all()
        .await?;

    let users = users.into_iter().map(User::into_dto).collect();

    Ok((StatusCode::OK, Json(UsersDto { users })))
}

/// Returns the user the bearer token belongs to.
///
/// Runs behind `require_auth`, which has already resolved the user.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UserEnvelopeDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 403, description = "User no longer exists", body = ErrorDto)
    ),
)]
pub async fn get_me(Extension(AuthUser(user)): Extension<AuthUser>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(UserEnvelopeDto {
            user: user.into_dto(),
        }),
    )
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserEnvelopeDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(UserRepository::new(&state.db))
        .get_by_id(id)
        .await
        .or_not_found(user_not_found(id))?;

    Ok((
        StatusCode::OK,
        Json(UserEnvelopeDto {
            user: user.into_dto(),
        }),
    ))
}

/// Partially updates a user.
///
/// Empty or missing fields keep their stored values; a new password is hashed
/// before it is saved.
///
/// # Returns
/// - `200 OK` - `{message}` confirming the update
/// - `400 Bad Request` - Invalid body or email held by another user
/// - `404 Not Found` - No active user with that ID
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = MessageDto),
        (status = 400, description = "Invalid user data", body = ValidationErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(UserRepository::new(&state.db))
        .update(id, payload)
        .await
        .or_not_found(user_not_found(id))?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User updated successfully")),
    ))
}

/// Soft-deletes a user.
///
/// The user disappears from every listing and their tokens stop working.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(UserRepository::new(&state.db))
        .delete(id)
        .await
        .or_not_found(user_not_found(id))?;

    tracing::info!("Deleted user {}", id);

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User deleted successfully")),
    ))
}

fn user_not_found(id: i32) -> String {
    format!("User with an id {} was not found", id)
}
