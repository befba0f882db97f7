//! GiveBridge Server — Donation-Matching Marketplace Backend
//!
//! Main entry point: loads configuration, initializes tracing, connects
//! to PostgreSQL, runs migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use givebridge_core::config::AppConfig;
use givebridge_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("GIVEBRIDGE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting GiveBridge v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = givebridge_database::DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    givebridge_database::migration::run_migrations(db.pool()).await?;

    givebridge_api::run_server(config, db.into_pool()).await
}
