use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let database = component_status(state.users.ping().await.is_ok());
    let storage = component_status(storage_ready(&state).await);

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
            "storage": storage,
            "auth": state.sessions.describe(),
        },
        "image_access": state.image_access.as_str(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    // Simple check: if we can respond, we're alive
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe: database reachable and storage root present
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if let Err(e) = state.users.ping().await {
        log::warn!("Readiness: database unavailable: {}", e);
        return (StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").into_response();
    }

    if !storage_ready(&state).await {
        log::warn!(
            "Readiness: storage root missing: {}",
            state.images.root().display()
        );
        return (StatusCode::SERVICE_UNAVAILABLE, "Storage unavailable").into_response();
    }

    (StatusCode::OK, "Ready").into_response()
}

async fn storage_ready(state: &AppState) -> bool {
    state.images.is_available().await
}

fn component_status(ok: bool) -> &'static str {
    if ok { "operational" } else { "unavailable" }
}
