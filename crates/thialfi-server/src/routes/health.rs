//! Health and stats endpoints.

use axum::{extract::State, routing::get, Json, Router};

use crate::json::{HealthResponse, StatsResponse};
use crate::AppState;

/// Health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/stats", get(stats))
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        stats: state.service.stats(),
    })
}

/// Store sizes and operation counters.
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        store: state.service.stats(),
        service: state.service.metrics(),
    })
}
