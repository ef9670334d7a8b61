//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
    /// Current number of albums in the catalog
    pub albums: usize,
}

/// GET /health
///
/// Health check endpoint for monitoring.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "albums-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums: state.catalog.len(),
    })
}

/// Build health check routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
