use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        event::{CreateEventDto, EventDto, UpdateEventDto},
        group::{CreateGroupDto, GroupDto, GroupSummaryDto, UpdateGroupDto},
        user::{
            CreateUserDto, LoginUserDto, TokenDto, UpdateUserDto, UserDto, UserEnvelopeDto,
            UsersDto,
        },
    },
    server::{
        controller::{event, group, user},
        middleware::auth::require_auth,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        user::create_user,
        user::login,
        user::get_users,
        user::get_me,
        user::get_user,
        user::update_user,
        user::delete_user,
        group::create_group,
        group::get_groups,
        group::get_group,
        group::update_group,
        group::delete_group,
        group::add_user_to_group,
        group::remove_user_from_group,
        event::create_event,
        event::get_events,
        event::get_event,
        event::update_event,
        event::delete_event,
        event::add_user_to_event,
        event::remove_user_from_event,
        event::add_group_to_event,
        event::remove_group_from_event,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        ValidationErrorDto,
        TokenDto,
        UserDto,
        UsersDto,
        UserEnvelopeDto,
        CreateUserDto,
        LoginUserDto,
        UpdateUserDto,
        GroupDto,
        GroupSummaryDto,
        CreateGroupDto,
        UpdateGroupDto,
        EventDto,
        CreateEventDto,
        UpdateEventDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = "user", description = "Registration, login and user management"),
        (name = "group", description = "Groups and their members"),
        (name = "event", description = "Events and their attending users and groups"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the complete application router.
///
/// All API routes live under `/api`. Only `/api/users/me` requires a bearer token.
/// Swagger UI is served at `/swagger-ui` backed by `/api-docs/openapi.json`.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/users/me", get(user::get_me))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api/users", post(user::create_user).get(user::get_users))
        .route("/api/users/login", post(user::login))
        .route(
            "/api/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/groups", post(group::create_group).get(group::get_groups))
        .route(
            "/api/groups/{id}",
            get(group::get_group)
                .put(group::update_group)
                .delete(group::delete_group),
        )
        .route(
            "/api/groups/{group_id}/users/{user_id}",
            post(group::add_user_to_group).delete(group::remove_user_from_group),
        )
        .route("/api/events", post(event::create_event).get(event::get_events))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/events/{event_id}/users/{user_id}",
            post(event::add_user_to_event).delete(event::remove_user_from_event),
        )
        .route(
            "/api/events/{event_id}/groups/{group_id}",
            post(event::add_group_to_event).delete(event::remove_group_from_event),
        )
        .merge(protected)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
