//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry already
//! validated, already parsed input from the service layer to the repositories.

pub mod event;
pub mod group;
pub mod user;
