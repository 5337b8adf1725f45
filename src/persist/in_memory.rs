//! InMemoryCollectionStore - HashMap-backed blob store for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{CollectionStore, PersistError};

/// In-memory collection store backed by a HashMap.
///
/// Clone-friendly via Arc: clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryCollectionStore {
    storage: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryCollectionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection names that have been written, for inspection in tests.
    pub fn collections(&self) -> Vec<String> {
        match self.storage.read() {
            Ok(storage) => storage.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl CollectionStore for InMemoryCollectionStore {
    fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, PersistError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| PersistError::Storage("lock poisoned".into()))?;
        Ok(storage.get(collection).cloned())
    }

    fn write(&self, collection: &str, bytes: &[u8]) -> Result<(), PersistError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| PersistError::Storage("lock poisoned".into()))?;
        storage.insert(collection.to_string(), bytes.to_vec());
        Ok(())
    }
}
