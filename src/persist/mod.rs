//! Persistence adapters — durable storage for content collections.
//!
//! The store treats persistence as a blob store keyed by collection name:
//! one serialized JSON array per collection, read once at startup and
//! written through on every mutation.
//!
//! ## Example
//!
//! ```ignore
//! use atelier::{CollectionStore, FileCollectionStore};
//!
//! let persist = FileCollectionStore::open("./data")?;
//! persist.write("artworks", br#"[]"#)?;
//! let blob = persist.read("artworks")?;
//! ```

mod file;
mod in_memory;

use std::fmt;

pub use file::FileCollectionStore;
pub use in_memory::InMemoryCollectionStore;

/// Error type for persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistError {
    /// Storage-level error (I/O, lock poisoned).
    Storage(String),
    /// Serialization/deserialization error.
    Serde(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Storage(msg) => write!(f, "persistence storage error: {}", msg),
            PersistError::Serde(msg) => write!(f, "persistence serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PersistError {}

/// Abstract blob storage for collections, keyed by collection name.
///
/// Implementations must be cheap to clone or share behind `Arc`; the store
/// writes through on every mutation.
pub trait CollectionStore: Send + Sync {
    /// Read the blob for a collection. Returns `None` when the collection
    /// has never been written.
    fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, PersistError>;

    /// Write the blob for a collection, replacing any previous value.
    fn write(&self, collection: &str, bytes: &[u8]) -> Result<(), PersistError>;
}

/// Typed helpers over the byte-level trait.
pub trait CollectionStoreExt: CollectionStore {
    /// Load a collection as a typed vector. A missing blob is `None`.
    fn load<T: serde::de::DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Option<Vec<T>>, PersistError> {
        match self.read(collection)? {
            Some(bytes) => {
                let items = serde_json::from_slice(&bytes)
                    .map_err(|e| PersistError::Serde(e.to_string()))?;
                Ok(Some(items))
            }
            None => Ok(None),
        }
    }

    /// Save a collection as a JSON array.
    fn save<T: serde::Serialize>(
        &self,
        collection: &str,
        items: &[T],
    ) -> Result<(), PersistError> {
        let bytes =
            serde_json::to_vec(items).map_err(|e| PersistError::Serde(e.to_string()))?;
        self.write(collection, &bytes)
    }
}

impl<S: CollectionStore + ?Sized> CollectionStoreExt for S {}
