//! HTTP request handlers.
//!
//! Handlers extract and validate input, call the matching service with a repository
//! built from the shared connection, and convert domain models into DTOs. Missing
//! rows are translated here into entity-specific 404 messages.

pub mod event;
pub mod extract;
pub mod group;
pub mod user;
