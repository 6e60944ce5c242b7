//! Application state shared across all request handlers.
//!
//! `AppState` is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool
//! and the token signing keys.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::util::token::TokenKeys;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and the token keys sit behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HS256 keys used to mint and verify bearer tokens.
    pub token_keys: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, token_keys: TokenKeys) -> Self {
        Self {
            db,
            token_keys: Arc::new(token_keys),
        }
    }
}
