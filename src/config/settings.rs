//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DATABASE_URL_ENV, DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_MIN_CONNECTIONS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("database_min_connections", &self.database_min_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// Fails if `DATABASE_URL` is not set or is empty.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var(DATABASE_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| AppError::config(format!("{} must be set", DATABASE_URL_ENV)))?;

        Ok(Self::new(database_url)
            .with_pool_size(
                env_parse("DATABASE_MIN_CONNECTIONS").unwrap_or(DEFAULT_DATABASE_MIN_CONNECTIONS),
                env_parse("DATABASE_MAX_CONNECTIONS").unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            )
            .with_server(
                env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                env_parse("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            ))
    }

    /// Configuration with defaults for everything except the database URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            database_min_connections: DEFAULT_DATABASE_MIN_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        }
    }

    /// Override the connection pool bounds.
    pub fn with_pool_size(mut self, min: u32, max: u32) -> Self {
        self.database_min_connections = min.min(max);
        self.database_max_connections = max.max(1);
        self
    }

    /// Override the bind address.
    pub fn with_server(mut self, host: impl Into<String>, port: u16) -> Self {
        self.server_host = host.into();
        self.server_port = port;
        self
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
