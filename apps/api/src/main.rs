//! JSON API process for the user resource, listening on port 3000 by
//! default. Shares the PostgreSQL database with the web process.

use core_config::tracing::{init_tracing, install_color_eyre};
use domain_users::{handlers, PgUserRepository, UserService};
use tracing::info;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config(config.database.clone()).await?;

    // composition root: repository -> service -> router, wired explicitly
    let repository = PgUserRepository::new(db.clone());
    let service = UserService::new(repository);
    let app = handlers::router(service);

    info!("Starting user API on {}", config.server.address());
    axum_helpers::serve(app, &config.server).await?;

    db.close().await?;
    info!("User API shutdown complete");
    Ok(())
}
