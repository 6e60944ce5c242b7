//! Bearer token authentication.
//!
//! `AuthGuard` resolves an `Authorization: Bearer <token>` header to an active user.
//! `require_auth` wraps it as axum middleware and stores the user in request
//! extensions as [`AuthUser`].

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::user::{UserRepository, UserStore},
    error::{auth::AuthError, AppError},
    model::user::User,
    state::AppState,
    util::token::TokenKeys,
};

/// The authenticated user for the current request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    keys: &'a TokenKeys,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a TokenKeys) -> Self {
        Self { db, keys }
    }

    /// Resolves the request's bearer token to an active user.
    ///
    /// # Returns
    /// - `Ok(User)` - Token is valid and its user still exists
    /// - `Err(AuthError::MissingToken)` - No bearer token on the request
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired or malformed token
    /// - `Err(AuthError::UserNoLongerExists)` - User was deleted after the token was issued
    pub async fn require(&self, headers: &HeaderMap) -> Result<User, AppError> {
        let Some(token) = bearer_token(headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.keys.verify(token).map_err(AuthError::InvalidToken)?;

        let user_repo = UserRepository::new(self.db);
        match user_repo.get_by_id(user_id).await {
            Ok(user) => Ok(user),
            Err(DbErr::RecordNotFound(_)) => Err(AuthError::UserNoLongerExists(user_id).into()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Middleware rejecting requests without a valid bearer token.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &state.token_keys)
        .require(req.headers())
        .await?;

    req.extensions_mut().insert(AuthUser(user));

    Ok(next.run(req).await)
}

/// Extracts a non-empty token from a `Bearer` authorization header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    (!token.is_empty()).then_some(token)
}
