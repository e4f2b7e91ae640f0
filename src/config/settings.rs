//! Process settings read from the environment. A `.env` file is honoured when present.

use crate::error::ConfigError;
use std::net::SocketAddr;

/// Required: PostgreSQL connection string.
pub const DATABASE_URI_VAR: &str = "DATABASE_URI";
/// Optional: listen address of the HTTP server.
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_uri: String,
    pub bind_addr: SocketAddr,
}

impl Settings {
    /// Load `.env` (if any), then read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_uri = lookup(DATABASE_URI_VAR)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingVar(DATABASE_URI_VAR))?;

        let raw_bind = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_bind
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidVar {
                name: BIND_ADDR_VAR,
                reason: e.to_string(),
            })?;

        Ok(Settings {
            database_uri,
            bind_addr,
        })
    }
}
