//! Greeting, health check and readiness endpoints
//!
//! Provides the legacy greeting endpoints plus health and readiness probes
//! for load balancer integration.

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::AppState;

/// Health check response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Health status ("healthy" or "unhealthy")
    pub status: String,
    /// Server version
    pub version: String,
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Dependency status
    pub dependencies: DependencyStatus,
}

/// Dependency status for health check
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyStatus {
    /// market_core availability
    pub market_core: bool,
    /// market_pricing availability
    pub market_pricing: bool,
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyResponse {
    /// Ready status
    pub ready: bool,
}

/// Build the health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/api/hello", get(hello_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
}

/// GET / - Root greeting
async fn root_handler() -> impl IntoResponse {
    Json(json!({ "message": "Marketdesk API" }))
}

/// GET /api/hello - Legacy greeting used by frontend smoke checks
async fn hello_handler() -> impl IntoResponse {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// GET /health - Health check endpoint
///
/// Returns the server health status, version, uptime, and dependency status.
/// The data and pricing crates are statically linked, so their status is a
/// formality kept for probe-format compatibility.
async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.start_time.elapsed().as_secs();

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
        uptime_secs: uptime,
        dependencies: DependencyStatus {
            market_core: true,
            market_pricing: true,
        },
    })
}

/// GET /ready - Readiness endpoint
async fn ready_handler() -> impl IntoResponse {
    Json(ReadyResponse { ready: true })
}
