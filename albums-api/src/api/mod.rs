//! HTTP API handlers for albums-api

pub mod albums;
pub mod docs;
pub mod health;

pub use albums::{create_album, get_album_by_id, list_albums, ApiError, ErrorBody};
pub use docs::ApiDoc;
pub use health::health_check;
