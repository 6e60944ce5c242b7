//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod token;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{auth::AuthError, config::ConfigError, token::TokenError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. `AuthError` handles its own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// `RecordNotFound` that no handler translated becomes a generic 404; everything
    /// else is a 500 with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token signing failed while minting a new token.
    #[error(transparent)]
    TokenErr(#[from] TokenError),

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(#[from] argon2::password_hash::Error),

    /// Request body failed field validation.
    ///
    /// Results in 400 Bad Request with a field to message map.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Event date was neither RFC 3339 nor `YYYY-MM-DD`.
    #[error("Invalid date format. Use YYYY-MM-DD or RFC3339.")]
    InvalidDateFormat,

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// The provided message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Builds the `{"errors": {...}}` body for a validation failure.
    ///
    /// Each failing field reports its first failed rule as
    /// `Field <name> failed on the '<rule>' tag`.
    pub fn validation_body(errors: &ValidationErrors) -> ValidationErrorDto {
        let errors = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first().map(|err| {
                    (
                        field.to_string(),
                        format!("Field {} failed on the '{}' tag", field, err.code),
                    )
                })
            })
            .collect::<BTreeMap<_, _>>();

        ValidationErrorDto { errors }
    }
}

/// Translates `DbErr::RecordNotFound` into an entity-specific 404.
///
/// Other errors pass through unchanged.
pub trait OrNotFound<T> {
    fn or_not_found(self, message: impl Into<String>) -> Result<T, AppError>;
}

impl<T, E> OrNotFound<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn or_not_found(self, message: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|err| match err.into() {
            AppError::DbErr(sea_orm::DbErr::RecordNotFound(_)) => AppError::NotFound(message.into()),
            other => other,
        })
    }
}

/// Translates a unique constraint violation into a 400 with the given message.
///
/// Covers writes that lose a race against a concurrent insert or rename after the
/// service's own uniqueness check passed. Other errors pass through unchanged.
pub trait OrConflict<T> {
    fn or_conflict(self, message: impl Into<String>) -> Result<T, AppError>;
}

impl<T> OrConflict<T> for Result<T, sea_orm::DbErr> {
    fn or_conflict(self, message: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|err| match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                AppError::BadRequest(message.into())
            }
            _ => err.into(),
        })
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `Validation` and `InvalidDateFormat`
/// - 404 Not Found - For `NotFound` and untranslated `DbErr::RecordNotFound`
/// - 500 Internal Server Error - For all other error types
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(Self::validation_body(&errors))).into_response()
            }
            Self::InvalidDateFormat => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: Self::InvalidDateFormat.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(sea_orm::DbErr::RecordNotFound(msg)) => {
                tracing::debug!("Unmapped record not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Resource not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
