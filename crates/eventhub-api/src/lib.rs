//! # eventhub-api
//!
//! HTTP API layer for EventHub built on Axum.
//!
//! Provides the REST endpoints, the `token`-header identity extractor,
//! DTOs, CORS, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use state::AppState;
