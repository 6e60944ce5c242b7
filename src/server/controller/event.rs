use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
    },
    server::{
        controller::extract::ValidatedJson,
        data::event::EventRepository,
        error::{AppError, OrNotFound},
        model::event::Event,
        service::event::EventService,
        state::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

/// Creates an event.
///
/// `date` accepts an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
///
/// # Returns
/// - `201 Created` - The stored event with (empty) users and groups
/// - `400 Bad Request` - Invalid body or unparseable date
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data or date format", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(EventRepository::new(&state.db))
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events with users and groups", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(EventRepository::new(&state.db))
        .get_all()
        .await?;

    let dto: Vec<EventDto> = events.into_iter().map(Event::into_dto).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event with users and groups", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(EventRepository::new(&state.db))
        .get_by_id(id)
        .await
        .or_not_found("Event not found")?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Partially updates an event.
///
/// Omitting `date` keeps the stored date.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data or date format", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(EventRepository::new(&state.db))
        .update(id, payload)
        .await
        .or_not_found("Event not found")?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(EventRepository::new(&state.db))
        .delete(id)
        .await
        .or_not_found("Event not found")?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/users/{user_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User attends the event", body = MessageDto),
        (status = 404, description = "Event or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user_to_event(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(EventRepository::new(&state.db))
        .add_user(event_id, user_id)
        .await
        .or_not_found("Event or user not found")?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User added to event successfully")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/users/{user_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User does not attend the event", body = MessageDto),
        (status = 404, description = "Event or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user_from_event(
    State(state): State<AppState>,
    Path((event_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(EventRepository::new(&state.db))
        .remove_user(event_id, user_id)
        .await
        .or_not_found("Event or user not found")?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User removed from event successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/events/{event_id}/groups/{group_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group attends the event", body = MessageDto),
        (status = 404, description = "Event or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_group_to_event(
    State(state): State<AppState>,
    Path((event_id, group_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(EventRepository::new(&state.db))
        .add_group(event_id, group_id)
        .await
        .or_not_found("Event or group not found")?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Group added to event successfully")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/events/{event_id}/groups/{group_id}",
    tag = EVENT_TAG,
    params(
        ("event_id" = i32, Path, description = "Event ID"),
        ("group_id" = i32, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group does not attend the event", body = MessageDto),
        (status = 404, description = "Event or group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_group_from_event(
    State(state): State<AppState>,
    Path((event_id, group_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    EventService::new(EventRepository::new(&state.db))
        .remove_group(event_id, group_id)
        .await
        .or_not_found("Event or group not found")?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Group removed from event successfully")),
    ))
}
