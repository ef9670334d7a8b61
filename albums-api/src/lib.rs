//! albums-api library - HTTP service for the in-memory albums catalog
//!
//! Exposes list, fetch-by-id, and create over HTTP/JSON plus generated
//! OpenAPI documentation with an interactive browser UI.

use axum::Router;
use tower_http::trace::TraceLayer;

use albums_common::Catalog;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Shared handle to the in-memory catalog
    pub catalog: Catalog,
}

impl AppState {
    /// Create new application state around an existing catalog handle
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

/// Build application router
///
/// Album routes, health endpoint, and the documentation pages
/// (`/docs` UI backed by `/api-docs/openapi.json`).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::albums::routes())
        .merge(api::health::routes())
        .merge(api::docs::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
