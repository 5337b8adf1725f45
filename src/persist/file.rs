//! FileCollectionStore - one JSON file per collection under a root directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{CollectionStore, PersistError};

/// Durable collection store writing `<root>/<collection>.json` files.
///
/// This is the local build variant's persistence: collections survive a
/// restart and are rehydrated by the store at startup.
#[derive(Debug, Clone)]
pub struct FileCollectionStore {
    root: PathBuf,
}

impl FileCollectionStore {
    /// Open a store rooted at the given directory, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, PersistError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| PersistError::Storage(e.to_string()))?;
        Ok(FileCollectionStore { root })
    }

    /// The root directory holding the collection files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{}.json", collection))
    }
}

impl CollectionStore for FileCollectionStore {
    fn read(&self, collection: &str) -> Result<Option<Vec<u8>>, PersistError> {
        match fs::read(self.path_for(collection)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistError::Storage(e.to_string())),
        }
    }

    fn write(&self, collection: &str, bytes: &[u8]) -> Result<(), PersistError> {
        fs::write(self.path_for(collection), bytes)
            .map_err(|e| PersistError::Storage(e.to_string()))
    }
}
