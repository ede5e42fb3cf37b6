use core_config::server::ServerConfig;
use core_config::{ConfigError, Environment, FromEnv};
use database::postgres::PostgresConfig;

/// Runtime configuration for the web process.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: PostgresConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env_with_default_port(8888)?,
            database: PostgresConfig::from_env()?,
        })
    }
}
