//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health — checks the database pool and the image store.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db_pool.health_check().await.unwrap_or(false);
    let media = state.image_store.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: overall_status(database, media).to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database,
        media,
        media_provider: state.image_store.provider_type().to_string(),
    })
}

fn overall_status(database: bool, media: bool) -> &'static str {
    if database && media { "ok" } else { "degraded" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ok_only_when_all_dependencies_up() {
        assert_eq!(overall_status(true, true), "ok");
        assert_eq!(overall_status(false, true), "degraded");
        assert_eq!(overall_status(true, false), "degraded");
        assert_eq!(overall_status(false, false), "degraded");
    }

    #[test]
    fn test_health_body_uses_camel_case_keys() {
        let json = serde_json::to_value(HealthResponse {
            status: "ok".to_string(),
            version: "1.0.0".to_string(),
            database: true,
            media: true,
            media_provider: "local".to_string(),
        })
        .unwrap();

        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"], true);
        assert_eq!(json["mediaProvider"], "local");
    }
}
