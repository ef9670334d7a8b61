//! Album routes: list, fetch-by-id, create
//!
//! Each handler is a thin adapter from a statically typed request to
//! catalog logic and back to JSON. Failures map onto three declared
//! conditions: bad input (400), not found (404), already exists (409).

use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use albums_common::{Album, Error};

use crate::AppState;

/// Build album routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/:id", get(get_album_by_id))
}

/// GET /albums
///
/// Full catalog snapshot in insertion order. Always succeeds; an empty
/// catalog yields an empty array.
#[utoipa::path(
    get,
    path = "/albums",
    tag = "Album",
    responses(
        (status = 200, description = "All albums in insertion order", body = [Album]),
    )
)]
pub async fn list_albums(State(state): State<AppState>) -> Json<Vec<Album>> {
    Json(state.catalog.list_all())
}

/// GET /albums/{id}
#[utoipa::path(
    get,
    path = "/albums/{id}",
    tag = "Album",
    params(
        ("id" = String, Path, description = "Album identifier"),
    ),
    responses(
        (status = 200, description = "Matching album", body = Album),
        (status = 404, description = "No album with this id", body = ErrorBody),
    )
)]
pub async fn get_album_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    state
        .catalog
        .find_by_id(&id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("album with id {id} not found")).into())
}

/// POST /albums
///
/// Validates the payload, then inserts it. The created album is echoed
/// back unchanged with status 201.
#[utoipa::path(
    post,
    path = "/albums",
    tag = "Album",
    request_body = Album,
    responses(
        (status = 201, description = "Album created", body = Album),
        (status = 400, description = "Payload failed validation", body = ErrorBody),
        (status = 409, description = "Album id already in use", body = ErrorBody),
    )
)]
pub async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<Album>, JsonRejection>,
) -> Result<(StatusCode, Json<Album>), ApiError> {
    let Json(album) = payload.map_err(ApiError::bad_request)?;

    album.validate()?;
    state.catalog.insert(album.clone())?;

    info!(id = %album.id, title = %album.title, "album created");
    Ok((StatusCode::CREATED, Json(album)))
}

/// Error body for 400/404/409 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Status label, e.g. "not_found"
    #[schema(example = "not_found")]
    pub status: String,
    /// Human-readable message
    pub error: String,
    /// Numeric application code (mirrors the HTTP status)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Structured context, e.g. field -> validation message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

/// HTTP-facing error wrapper around the common error type
#[derive(Debug)]
pub struct ApiError(Error);

impl ApiError {
    fn bad_request(rejection: JsonRejection) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert("body".to_string(), rejection.body_text());
        Self(Error::Validation(fields))
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label, context) = match &self.0 {
            Error::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                "invalid_argument",
                Some(fields.clone()),
            ),
            Error::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            Error::AlreadyExists(_) => (StatusCode::CONFLICT, "already_exists", None),
            Error::Config(_) | Error::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", None)
            }
        };

        let body = Json(ErrorBody {
            status: label.to_string(),
            error: self.0.to_string(),
            code: Some(status.as_u16()),
            context,
        });

        (status, body).into_response()
    }
}
