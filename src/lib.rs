//! REST backend for users, groups and events.
//!
//! The binary in `main.rs` wires configuration, the database and the router together;
//! everything else lives here so integration tests can build the router directly.

pub mod model;
pub mod server;
