//! Album record and validation rules
//!
//! Validation is an explicit function on the entity, decoupled from
//! serialization, so the rule set is testable without the HTTP layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Error, Result};

/// Data about a record album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Album {
    /// ID is a unique string that determines album.
    #[serde(default)]
    #[schema(min_length = 1, example = "1")]
    pub id: String,

    /// Title of the album.
    #[serde(default)]
    #[schema(min_length = 1, example = "Blue Train")]
    pub title: String,

    /// Album author, can be empty for multi-artist compilations.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[schema(example = "John Coltrane")]
    pub artist: String,

    /// Price in USD.
    #[serde(default)]
    #[schema(minimum = 0.0, example = 56.99)]
    pub price: f64,
}

impl Album {
    /// Check the declared field constraints.
    ///
    /// Collects every failing field into one `Error::Validation` so the
    /// caller sees all problems at once. A missing `price` deserializes
    /// to 0.0 and passes.
    pub fn validate(&self) -> Result<()> {
        let mut fields = BTreeMap::new();

        if self.id.is_empty() {
            fields.insert("id".to_string(), "must not be empty".to_string());
        }
        if self.title.is_empty() {
            fields.insert("title".to_string(), "must not be empty".to_string());
        }
        if self.price < 0.0 {
            fields.insert("price".to_string(), "must not be negative".to_string());
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(fields))
        }
    }
}
