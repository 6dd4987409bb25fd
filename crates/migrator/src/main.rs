use anyhow::{bail, Result};
use tracing::info;

use support_bot_db::{config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;
    logging::init_logging(&config.logging);

    info!("Starting support bot migrator v{}", env!("CARGO_PKG_VERSION"));

    let db_config = persistence::db::DatabaseConfig::from(&config.database);
    let pool = persistence::db::create_pool(&db_config).await?;
    persistence::metrics::record_pool_metrics(&pool);

    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Migrations completed");

    let missing = persistence::db::verify_schema(&pool).await?;
    if !missing.is_empty() {
        bail!("Schema verification failed, missing tables: {}", missing.join(", "));
    }
    info!("Schema verified");

    pool.close().await;
    Ok(())
}
