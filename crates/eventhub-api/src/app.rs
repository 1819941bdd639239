//! Application builder — wires repositories, services, and the router
//! into a running Axum server.

use std::sync::Arc;

use eventhub_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use eventhub_core::config::AppConfig;
use eventhub_core::error::AppError;
use eventhub_database::DatabasePool;
use eventhub_database::repositories::{EventRepository, EventStore, UserRepository, UserStore};
use eventhub_service::{EventService, EventsPdfRenderer, UserService};

use crate::router::build_router;
use crate::state::AppState;

/// Runs the EventHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: DatabasePool) -> Result<(), AppError> {
    tracing::info!("Starting EventHub server...");

    create_data_directories(&config).await?;

    // Repositories
    let user_repo: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.pool().clone()));
    let event_repo: Arc<dyn EventStore> = Arc::new(EventRepository::new(db_pool.pool().clone()));

    // Auth
    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // Image store
    tracing::info!(provider = %config.media.provider, "Initializing image store");
    let image_store = eventhub_storage::create_image_store(&config.media).await?;

    // Services
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let event_service = Arc::new(EventService::new(
        Arc::clone(&event_repo),
        Arc::clone(&user_repo),
        Arc::clone(&image_store),
        config.media.clone(),
        config.events.clone(),
    ));
    let pdf_renderer = Arc::new(EventsPdfRenderer::new());

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        image_store,
        jwt_decoder,
        user_service,
        event_service,
        pdf_renderer,
    };

    let app = build_router(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("EventHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("EventHub server stopped");

    Ok(())
}

async fn create_data_directories(config: &AppConfig) -> Result<(), AppError> {
    let mut dirs = vec![config.media.temp_dir.clone()];
    if config.media.provider == "local" {
        dirs.push(config.media.local.root.clone());
    }

    for dir in &dirs {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create dir '{dir}': {e}")))?;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
