//! OpenAPI document and interactive documentation UI
//!
//! The document is generated from the handlers' `#[utoipa::path]`
//! declarations and the schema derives on `Album` and `ErrorBody`.
//! Swagger UI is served at `/docs`, the raw document at
//! `/api-docs/openapi.json`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use albums_common::Album;

use crate::api::albums;
use crate::AppState;

/// Top-level OpenAPI document for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Albums API",
        version = "v1.0.0",
        description = "This service provides API to manage albums."
    ),
    paths(
        albums::list_albums,
        albums::get_album_by_id,
        albums::create_album,
    ),
    components(schemas(Album, albums::ErrorBody)),
    tags(
        (name = "Album", description = "Album catalog operations"),
    )
)]
pub struct ApiDoc;

/// The generated OpenAPI document (exposed for tests and tooling).
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

/// Build documentation routes
pub fn routes() -> Router<AppState> {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", openapi())
        .into()
}
