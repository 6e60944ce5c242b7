use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        group::{CreateGroupDto, GroupDto, UpdateGroupDto},
    },
    server::{
        controller::extract::ValidatedJson,
        data::group::GroupRepository,
        error::{AppError, OrNotFound},
        model::group::Group,
        service::group::GroupService,
        state::AppState,
    },
};

pub static GROUP_TAG: &str = "group";

#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid group data or name taken", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(GroupRepository::new(&state.db))
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups with their members", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(GroupRepository::new(&state.db))
        .get_all()
        .await?;

    let dto: Vec<GroupDto> = groups.into_iter().map(Group::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group with its members", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(GroupRepository::new(&state.db))
        .get_by_id(id)
        .await
        .or_not_found("Group not found")?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 400, description = "Invalid group data or name taken", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(GroupRepository::new(&state.db))
        .update(id, payload)
        .await
        .or_not_found("Group not found")?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Deletes a group together with its memberships and event links.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(GroupRepository::new(&state.db))
        .delete(id)
        .await
        .or_not_found("Group not found")?;

    Ok(StatusCode::NO_CONTENT)
}

/// Adds a user to a group. Adding an existing member succeeds without change.
#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/users/{user_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User is a member", body = MessageDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_to_group(
    State(state): State<AppState>,
    Path((group_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(GroupRepository::new(&state.db))
        .add_user(group_id, user_id)
        .await
        .or_not_found("Group or user not found")?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User added to group successfully")),
    ))
}

/// Removes a user from a group. Removing a non-member succeeds without change.
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}/users/{user_id}",
    tag = GROUP_TAG,
    params(
        ("group_id" = i32, Path, description = "Group ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User is not a member", body = MessageDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_from_group(
    State(state): State<AppState>,
    Path((group_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(GroupRepository::new(&state.db))
        .remove_user(group_id, user_id)
        .await
        .or_not_found("Group or user not found")?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User removed from group successfully")),
    ))
}
