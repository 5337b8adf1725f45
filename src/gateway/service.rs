//! Table mapping for the CRUD gateway.

use crate::content::{new_record_id, Artwork, Book, JournalPost, Record};
use crate::persist::{CollectionStore, CollectionStoreExt};

use super::GatewayError;

/// One collection ↔ one table, backed by a [`CollectionStore`].
///
/// Insert prepends, delete is idempotent, list returns every row in the
/// collection's order. No transactions, no consistency guarantees beyond
/// what the backing store provides.
pub struct GatewayService<S> {
    persist: S,
}

impl<S: CollectionStore> GatewayService<S> {
    pub fn new(persist: S) -> Self {
        GatewayService { persist }
    }

    // =========================================================================
    // Artworks — ordered by year, newest first
    // =========================================================================

    pub fn list_artworks(&self) -> Result<Vec<Artwork>, GatewayError> {
        let mut rows = self.rows::<Artwork>()?;
        rows.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(rows)
    }

    pub fn insert_artwork(&self, artwork: Artwork) -> Result<Artwork, GatewayError> {
        self.insert(artwork)
    }

    pub fn remove_artwork(&self, id: &str) -> Result<bool, GatewayError> {
        self.remove::<Artwork>(id)
    }

    // =========================================================================
    // Books — ordered by creation, newest first
    // =========================================================================

    pub fn list_books(&self) -> Result<Vec<Book>, GatewayError> {
        self.rows::<Book>()
    }

    pub fn insert_book(&self, book: Book) -> Result<Book, GatewayError> {
        self.insert(book)
    }

    pub fn remove_book(&self, id: &str) -> Result<bool, GatewayError> {
        self.remove::<Book>(id)
    }

    // =========================================================================
    // Journal — ordered by date, newest first
    // =========================================================================

    pub fn list_journal(&self) -> Result<Vec<JournalPost>, GatewayError> {
        let mut rows = self.rows::<JournalPost>()?;
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    pub fn insert_journal(&self, post: JournalPost) -> Result<JournalPost, GatewayError> {
        self.insert(post)
    }

    pub fn remove_journal(&self, id: &str) -> Result<bool, GatewayError> {
        self.remove::<JournalPost>(id)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn rows<T: Record>(&self) -> Result<Vec<T>, GatewayError> {
        Ok(self.persist.load(T::COLLECTION)?.unwrap_or_default())
    }

    /// Prepend a row, assigning an identity when the caller sent none.
    fn insert<T: Record>(&self, mut row: T) -> Result<T, GatewayError> {
        if row.id().is_empty() {
            row.set_id(new_record_id());
        }
        let mut rows = self.rows::<T>()?;
        rows.insert(0, row.clone());
        self.persist.save(T::COLLECTION, &rows)?;
        Ok(row)
    }

    fn remove<T: Record>(&self, id: &str) -> Result<bool, GatewayError> {
        let mut rows = self.rows::<T>()?;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        let existed = rows.len() != before;
        if existed {
            self.persist.save(T::COLLECTION, &rows)?;
        }
        Ok(existed)
    }
}
