//! Health check endpoint handlers.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub store: StoreHealth,
}

/// Record store health.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHealth {
    pub latency_ms: u64,
    pub class_schedules: usize,
    pub bookings: usize,
}

/// Simple status response for liveness/readiness probes.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Health check.
///
/// GET /api/health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let start = std::time::Instant::now();
    let stats = state.store.stats().await;
    let latency_ms = start.elapsed().as_millis() as u64;

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: StoreHealth {
            latency_ms,
            class_schedules: stats.class_schedules,
            bookings: stats.bookings,
        },
    })
}

/// Liveness probe.
///
/// GET /api/health/live
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "alive".to_string(),
    })
}

/// Readiness probe. The store is in-process, so answering at all means ready.
///
/// GET /api/health/ready
pub async fn ready(State(state): State<AppState>) -> Json<StatusResponse> {
    state.store.stats().await;
    Json(StatusResponse {
        status: "ready".to_string(),
    })
}
