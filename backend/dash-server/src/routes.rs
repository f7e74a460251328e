use crate::{AppState, get_me, get_user, health, serve_image, serve_my_image, upload_image};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let body_limit = match state.max_upload_bytes {
        0 => DefaultBodyLimit::disable(),
        max => DefaultBodyLimit::max(max),
    };

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Profile picture endpoints ("me" wins over the {user_id} capture)
        .route(
            "/api/v1/users/me/image",
            post(upload_image).get(serve_my_image),
        )
        .route("/api/v1/users/{user_id}/image", get(serve_image))
        // Profile endpoints
        .route("/api/v1/users/me", get(get_me))
        .route("/api/v1/users/{user_id}", get(get_user))
        .layer(body_limit)
        // Add shared state
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
