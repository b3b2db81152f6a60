//! Store connection configuration.
//!
//! Coordinates are read once at startup from `POSTGRES_*` variables, with
//! defaults matching the local Hexis deployment. Nothing below the
//! bootstrap consults the environment.

use std::env;

use anyhow::{Context, Result};

/// Connection coordinates for the Hexis memory database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 43835,
            database: "hexis_memory".to_string(),
            user: "hexis_user".to_string(),
            password: "hexis_password".to_string(),
        }
    }
}

impl StoreConfig {
    /// Read coordinates from the environment, falling back to the defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let port = match env::var("POSTGRES_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid POSTGRES_PORT: {raw}"))?,
            Err(_) => defaults.port,
        };
        Ok(Self {
            host: env::var("POSTGRES_HOST").unwrap_or(defaults.host),
            port,
            database: env::var("POSTGRES_DB").unwrap_or(defaults.database),
            user: env::var("POSTGRES_USER").unwrap_or(defaults.user),
            password: env::var("POSTGRES_PASSWORD").unwrap_or(defaults.password),
        })
    }
}
