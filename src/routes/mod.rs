mod lookup;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. The handlers only adapt HTTP to
/// [`crate::lookup::lookup`]; failures are reported in the body, not the status.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/lookup", post(lookup::lookup_form))
        .route("/users/{user_id}", get(lookup::lookup_path))
        .route("/version", get(version));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "git_sha": env!("GIT_SHA"),
    }))
}
