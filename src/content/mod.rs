//! Content records — the three collections the site manages.
//!
//! Each record type implements [`Record`], which ties it to a collection
//! name and an identity. Records are immutable after creation: the store
//! only prepends and deletes, it never edits in place.

mod artwork;
mod book;
mod journal;

use serde::{de::DeserializeOwned, Serialize};

pub use artwork::{Artwork, Category};
pub use book::Book;
pub use journal::JournalPost;

/// Trait for types stored as a content collection.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this record type (e.g., "artworks").
    /// Maps to a table in the CRUD gateway and a blob key in local storage.
    const COLLECTION: &'static str;

    /// The unique identifier of this record.
    fn id(&self) -> &str;

    /// Replace the identifier. The gateway assigns one on insert when the
    /// caller sent none.
    fn set_id(&mut self, id: String);

    /// The default-language title, used in audit log messages.
    fn headline(&self) -> &str;
}

/// Generate a fresh record identity.
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
