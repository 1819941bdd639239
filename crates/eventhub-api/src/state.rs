//! Application state shared across all handlers.

use std::sync::Arc;

use eventhub_auth::JwtDecoder;
use eventhub_core::config::AppConfig;
use eventhub_core::traits::ImageStore;
use eventhub_database::DatabasePool;
use eventhub_service::{EventService, EventsPdfRenderer, UserService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool handle, checked by the health endpoint.
    pub db_pool: DatabasePool,
    /// Image store, checked by the health endpoint.
    pub image_store: Arc<dyn ImageStore>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// User credential and account service.
    pub user_service: Arc<UserService>,
    /// Event CRUD service.
    pub event_service: Arc<EventService>,
    /// Events PDF renderer.
    pub pdf_renderer: Arc<EventsPdfRenderer>,
}
