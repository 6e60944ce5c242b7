use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 5;

pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub port: u16,

    pub db_max_connections: u32,
    pub db_min_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            secret_key: required("SECRET_KEY")?,
            port: optional("PORT", DEFAULT_PORT)?,
            db_max_connections: optional("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            db_min_connections: optional("DB_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS)?,
        })
    }
}

/// Reads an environment variable that must be set to a non-empty value.
fn required(name: &str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingEnvVar(name.to_string())),
    }
}

/// Reads and parses an environment variable, falling back to `default` when unset.
fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => {
            value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        }
        _ => Ok(default),
    }
}
