//! In-memory catalog store
//!
//! An insertion-ordered collection of albums behind a `RwLock`. The
//! store is a cloneable handle; every clone shares the same underlying
//! sequence, so it can be placed in HTTP application state and passed
//! into each handler.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::{Album, Error, Result};

/// Shared handle to the in-memory album collection.
///
/// Uniqueness of `id` is enforced on insert: the check and the append
/// happen under a single write-lock acquisition, so concurrent creates
/// cannot both pass the check.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    albums: Arc<RwLock<Vec<Album>>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with the three fixed seed albums.
    pub fn seeded() -> Self {
        let seed = vec![
            Album {
                id: "1".to_string(),
                title: "Blue Train".to_string(),
                artist: "John Coltrane".to_string(),
                price: 56.99,
            },
            Album {
                id: "2".to_string(),
                title: "Jeru".to_string(),
                artist: "Gerry Mulligan".to_string(),
                price: 17.99,
            },
            Album {
                id: "3".to_string(),
                title: "Sarah Vaughan and Clifford Brown".to_string(),
                artist: "Sarah Vaughan".to_string(),
                price: 39.99,
            },
        ];

        Self {
            albums: Arc::new(RwLock::new(seed)),
        }
    }

    /// Snapshot of all albums in insertion order.
    pub fn list_all(&self) -> Vec<Album> {
        self.albums.read().expect("catalog lock poisoned").clone()
    }

    /// Find an album by id. Linear scan; the catalog stays small.
    pub fn find_by_id(&self, id: &str) -> Option<Album> {
        self.albums
            .read()
            .expect("catalog lock poisoned")
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// Append an album if its id is unused.
    ///
    /// Fails with `Error::AlreadyExists` on a duplicate id and leaves
    /// the catalog unchanged.
    pub fn insert(&self, album: Album) -> Result<()> {
        let mut albums = self.albums.write().expect("catalog lock poisoned");

        if albums.iter().any(|a| a.id == album.id) {
            return Err(Error::AlreadyExists(format!(
                "album with id {} already exists",
                album.id
            )));
        }

        debug!(id = %album.id, title = %album.title, "inserting album");
        albums.push(album);
        Ok(())
    }

    /// Number of albums currently in the catalog.
    pub fn len(&self) -> usize {
        self.albums.read().expect("catalog lock poisoned").len()
    }

    /// True when the catalog holds no albums.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
