use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

/// PostgreSQL connection-pool configuration.
///
/// Construct manually with [`PostgresConfig::new`] or load from the
/// environment via [`FromEnv`]:
///
/// - `DATABASE_URL` (required) — connection string
/// - `DATABASE_MAX_CONNECTIONS` (default 10)
/// - `DATABASE_MIN_CONNECTIONS` (default 1)
/// - `DATABASE_CONNECT_TIMEOUT_SECS` (default 8)
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(8),
        }
    }

    /// Convert into SeaORM connect options, including sqlx statement
    /// logging at debug level.
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.url);
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.connect_timeout)
            .sqlx_logging(true)
            .sqlx_logging_level(LevelFilter::Debug);
        options
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        })
}

impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parsed("DATABASE_MAX_CONNECTIONS", "10")?,
            min_connections: env_parsed("DATABASE_MIN_CONNECTIONS", "1")?,
            connect_timeout: Duration::from_secs(env_parsed(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                "8",
            )?),
        })
    }
}
