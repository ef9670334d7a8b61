//! # Albums Common Library
//!
//! Shared code for the albums catalog service including:
//! - The `Album` record and its validation rules
//! - The in-memory `Catalog` store
//! - Error types
//! - Configuration loading

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::Album;
