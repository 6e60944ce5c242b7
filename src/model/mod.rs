//! Request and response shapes shared by the HTTP API.
//!
//! DTOs carry serde, validation and OpenAPI metadata only. Conversion to and from
//! the server's domain models lives next to those models.

pub mod api;
pub mod event;
pub mod group;
pub mod user;

use serde::Deserialize;

/// Deserializes an optional string field, treating an empty string as absent.
///
/// Partial update requests only overwrite fields that carry a non-empty value.
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
