//! Route definitions for the EventHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Headroom above the image limit so oversized uploads reach the size
    // check and get the 400 message instead of a bare 413.
    let max_body = (state.config.media.max_image_size_bytes as usize) * 2;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth and account endpoints.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout/{id}", post(handlers::auth::logout))
        .route("/auth/user/{id}", put(handlers::user::update_user))
        .route("/auth/user/{id}", get(handlers::user::get_user))
        .route("/auth/user/{id}", delete(handlers::user::delete_user))
        .route("/auth/users", get(handlers::user::list_users))
}

/// Event CRUD, image upload, PDF export.
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", post(handlers::event::create_event))
        .route("/events", get(handlers::event::list_events))
        .route("/events/pdf", get(handlers::event::events_pdf))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", put(handlers::event::update_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
}

/// Liveness endpoint, no auth.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
