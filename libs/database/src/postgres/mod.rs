mod config;
mod connector;

pub use config::PostgresConfig;
pub use connector::{connect, connect_from_config, connect_with_options};
