//! Server-rendered HTML process for the user resource, listening on port
//! 8888 by default. Shares the PostgreSQL database with the API process.

use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{PgUserRepository, UserService};
use tracing::info;

mod config;
mod handlers;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config(config.database.clone()).await?;

    let repository = PgUserRepository::new(db.clone());
    let service = UserService::new(repository);
    let app = handlers::router(service)?;

    info!("Starting user web on {}", config.server.address());
    axum_helpers::serve(app, &config.server).await?;

    db.close().await?;
    info!("User web shutdown complete");
    Ok(())
}
