use axum::extract::State;
use axum::{routing::get, Json, Router};
use konige_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"OK"` when the database answers a ping, `"degraded"` otherwise.
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: Timestamp,
}

/// GET /health -- used by the frontend to verify connectivity.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = konige_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "OK" } else { "degraded" },
        message: "Konige API is running",
        timestamp: chrono::Utc::now(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
