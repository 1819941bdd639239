//! EventHub Server — event management REST backend.
//!
//! Main entry point: loads configuration, initializes logging, connects
//! to PostgreSQL, runs migrations, and starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("EVENTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Starting EventHub v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
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

async fn run(config: AppConfig) -> Result<(), AppError> {
    let db_pool = eventhub_database::DatabasePool::connect(&config.database).await?;

    eventhub_database::migration::run_migrations(db_pool.pool()).await?;

    eventhub_api::run_server(config, db_pool).await
}
