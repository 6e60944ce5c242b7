use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::token::TokenError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no bearer token.
    ///
    /// Either the `Authorization` header is absent, does not use the `Bearer` scheme,
    /// or the token after the scheme is empty. Results in a 401 Unauthorized response.
    #[error("Request has no bearer token")]
    MissingToken,

    /// Bearer token failed verification.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(TokenError),

    /// Token was valid but its user has been deleted or never existed.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} referenced by token no longer exists")]
    UserNoLongerExists(i32),

    /// Email and password pair did not match any active user.
    ///
    /// Results in a 401 Unauthorized response. Unknown emails and wrong passwords
    /// are reported identically.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 with "You are not logged in"
/// - `InvalidToken` → 401 naming the verification failure
/// - `InvalidCredentials` → 401 with "Invalid email or password"
/// - `UserNoLongerExists` → 403
///
/// All errors are logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "You are not logged in".to_string()),
            Self::InvalidToken(err) => (StatusCode::UNAUTHORIZED, format!("Invalid token: {}", err)),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid email or password".to_string(),
            ),
            Self::UserNoLongerExists(_) => (
                StatusCode::FORBIDDEN,
                "The user belonging to this token no longer exists".to_string(),
            ),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
