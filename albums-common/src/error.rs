//! Common error types for the albums service

use std::collections::BTreeMap;
use thiserror::Error;

/// Common result type for albums operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types shared between the catalog store and the HTTP layer
#[derive(Error, Debug)]
pub enum Error {
    /// Request payload failed a declared validation rule.
    /// Carries a field -> message map for the response context.
    #[error("Invalid input: {}", format_fields(.0))]
    Validation(BTreeMap<String, String>),

    /// Lookup by identifier had no match
    #[error("Not found: {0}")]
    NotFound(String),

    /// Create collided with an existing record id
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_fields(fields: &BTreeMap<String, String>) -> String {
    fields
        .iter()
        .map(|(field, msg)| format!("{field} {msg}"))
        .collect::<Vec<_>>()
        .join(", ")
}
