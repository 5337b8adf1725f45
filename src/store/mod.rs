//! The client store — single authoritative holder of all mutable state.
//!
//! Every read in the UI layer and every write goes through a [`Store`]. It
//! owns the three content collections, the cart, the audit log, the
//! notification queue, the advisor chat transcript, and the UI flags
//! (active language, cart drawer). The store is explicitly constructed and
//! passed around; there is no ambient global.
//!
//! Mutations are synchronous with respect to each other and write through
//! to the [`CollectionStore`] before returning, so a persistence failure is
//! reported to the caller rather than silently diverging.
//!
//! ## Example
//!
//! ```ignore
//! use atelier::{InMemoryCollectionStore, Store};
//!
//! let store = Store::new(InMemoryCollectionStore::new());
//! store.hydrate()?;
//! store.add_artwork(artwork)?;
//! assert_eq!(store.log()[0].action, "Added new artwork: The Mirror");
//! ```

mod sweeper;

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use rust_decimal::Decimal;

use crate::audit::{AuditEntry, ChatMessage, ChatRole};
use crate::cart::CartItem;
use crate::content::{Artwork, Book, JournalPost, Record};
use crate::language::Language;
use crate::notify::{Notification, NotificationQueue, Severity};
use crate::persist::{CollectionStore, CollectionStoreExt, PersistError};

pub use sweeper::NotificationSweeper;

/// Blob key for the persisted audit log.
pub const ADMIN_LOG_COLLECTION: &str = "admin_log";
/// Blob key for the persisted cart.
pub const CART_COLLECTION: &str = "cart";
/// Blob key for the persisted chat history.
pub const CHAT_COLLECTION: &str = "chat";

/// Error type for store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Internal lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// Write-through to the persistence adapter failed.
    Persist {
        collection: &'static str,
        source: PersistError,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::Persist { collection, source } => {
                write!(f, "failed to persist {}: {}", collection, source)
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Persist { source, .. } => Some(source),
            _ => None,
        }
    }
}

struct State {
    artworks: Vec<Artwork>,
    books: Vec<Book>,
    journal: Vec<JournalPost>,
    cart: Vec<CartItem>,
    log: Vec<AuditEntry>,
    chat: Vec<ChatMessage>,
    notifications: NotificationQueue,
    language: Language,
    cart_open: bool,
}

impl State {
    fn seeded() -> Self {
        State {
            artworks: Vec::new(),
            books: Vec::new(),
            journal: Vec::new(),
            cart: Vec::new(),
            log: vec![AuditEntry::now("System initialized")],
            chat: Vec::new(),
            notifications: NotificationQueue::default(),
            language: Language::base(),
            cart_open: false,
        }
    }

    fn push_log(&mut self, action: impl Into<String>) {
        self.log.insert(0, AuditEntry::now(action));
    }
}

/// The state container. Clones share state (and the persistence adapter).
pub struct Store<S> {
    state: Arc<RwLock<State>>,
    persist: Arc<S>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Store {
            state: Arc::clone(&self.state),
            persist: Arc::clone(&self.persist),
        }
    }
}

impl<S: CollectionStore> Store<S> {
    /// Create a store backed by the given persistence adapter.
    ///
    /// The audit log starts with a single "System initialized" entry;
    /// nothing is written to the adapter until the first mutation.
    pub fn new(persist: S) -> Self {
        Store {
            state: Arc::new(RwLock::new(State::seeded())),
            persist: Arc::new(persist),
        }
    }

    /// Override the notification time-to-live (default 5 seconds).
    pub fn with_notification_ttl(self, ttl: Duration) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.notifications = NotificationQueue::new(ttl);
        }
        self
    }

    /// The persistence adapter backing this store.
    pub fn persistence(&self) -> &S {
        &self.persist
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Read every persisted collection once, replacing the in-memory state.
    ///
    /// Missing blobs leave the seeded defaults in place. Called once at
    /// startup; afterwards the in-memory state is authoritative and is
    /// written through on every mutation.
    pub fn hydrate(&self) -> Result<(), StoreError> {
        let mut state = self.write_state()?;

        if let Some(artworks) = self.load(Artwork::COLLECTION)? {
            state.artworks = artworks;
        }
        if let Some(books) = self.load(Book::COLLECTION)? {
            state.books = books;
        }
        if let Some(journal) = self.load(JournalPost::COLLECTION)? {
            state.journal = journal;
        }
        if let Some(cart) = self.load(CART_COLLECTION)? {
            state.cart = cart;
        }
        if let Some(log) = self.load(ADMIN_LOG_COLLECTION)? {
            state.log = log;
        }
        if let Some(chat) = self.load(CHAT_COLLECTION)? {
            state.chat = chat;
        }

        tracing::debug!(
            artworks = state.artworks.len(),
            books = state.books.len(),
            journal = state.journal.len(),
            "store hydrated"
        );
        Ok(())
    }

    // =========================================================================
    // Content collections
    // =========================================================================

    /// Prepend an artwork and record the action in the audit log.
    pub fn add_artwork(&self, artwork: Artwork) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.push_log(format!("Added new artwork: {}", artwork.headline()));
        state.artworks.insert(0, artwork);
        self.save(Artwork::COLLECTION, &state.artworks)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Remove an artwork by id. Unknown ids are a no-op with no log entry.
    pub fn remove_artwork(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        let Some(pos) = state.artworks.iter().position(|a| a.id == id) else {
            return Ok(());
        };
        let removed = state.artworks.remove(pos);
        state.push_log(format!("Removed artwork: {}", removed.headline()));
        self.save(Artwork::COLLECTION, &state.artworks)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Prepend a book and record the action in the audit log.
    pub fn add_book(&self, book: Book) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.push_log(format!("Added new book: {}", book.headline()));
        state.books.insert(0, book);
        self.save(Book::COLLECTION, &state.books)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Remove a book by id. Unknown ids are a no-op with no log entry.
    pub fn remove_book(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        let Some(pos) = state.books.iter().position(|b| b.id == id) else {
            return Ok(());
        };
        let removed = state.books.remove(pos);
        state.push_log(format!("Removed book: {}", removed.headline()));
        self.save(Book::COLLECTION, &state.books)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Prepend a journal post and record the action in the audit log.
    pub fn add_journal(&self, post: JournalPost) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.push_log(format!("Published journal post: {}", post.headline()));
        state.journal.insert(0, post);
        self.save(JournalPost::COLLECTION, &state.journal)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Remove a journal post by id. Unknown ids are a no-op with no log entry.
    pub fn remove_journal(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        let Some(pos) = state.journal.iter().position(|p| p.id == id) else {
            return Ok(());
        };
        let removed = state.journal.remove(pos);
        state.push_log(format!("Removed journal post: {}", removed.headline()));
        self.save(JournalPost::COLLECTION, &state.journal)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Replace the artwork collection wholesale (gateway hydration).
    pub fn replace_artworks(&self, artworks: Vec<Artwork>) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.artworks = artworks;
        self.save(Artwork::COLLECTION, &state.artworks)
    }

    /// Replace the book collection wholesale (gateway hydration).
    pub fn replace_books(&self, books: Vec<Book>) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.books = books;
        self.save(Book::COLLECTION, &state.books)
    }

    /// Replace the journal collection wholesale (gateway hydration).
    pub fn replace_journal(&self, journal: Vec<JournalPost>) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.journal = journal;
        self.save(JournalPost::COLLECTION, &state.journal)
    }

    pub fn artworks(&self) -> Vec<Artwork> {
        self.read_state().map(|s| s.artworks.clone()).unwrap_or_default()
    }

    pub fn books(&self) -> Vec<Book> {
        self.read_state().map(|s| s.books.clone()).unwrap_or_default()
    }

    pub fn journal(&self) -> Vec<JournalPost> {
        self.read_state().map(|s| s.journal.clone()).unwrap_or_default()
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add a book to the cart.
    ///
    /// An already-present book id increments its quantity; otherwise a new
    /// line with quantity 1 is appended. Either way the cart drawer opens,
    /// a success notification is queued, and the action is logged.
    pub fn add_to_cart(&self, book: Book) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        let title = book.headline().to_string();

        match state.cart.iter_mut().find(|item| item.book.id == book.id) {
            Some(item) => {
                item.quantity += 1;
                let message = format!("{} quantity updated", title);
                state
                    .notifications
                    .push(message, Severity::Success, Instant::now());
            }
            None => {
                state.cart.push(CartItem::new(book));
                let message = format!("{} added to cart", title);
                state
                    .notifications
                    .push(message, Severity::Success, Instant::now());
            }
        }

        state.cart_open = true;
        state.push_log(format!("Added to cart: {}", title));
        self.save(CART_COLLECTION, &state.cart)?;
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    /// Remove a cart line by book id. Idempotent, no notification.
    pub fn remove_from_cart(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.cart.retain(|item| item.book.id != id);
        self.save(CART_COLLECTION, &state.cart)
    }

    /// Empty the cart. Idempotent, no notification.
    pub fn clear_cart(&self) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.cart.clear();
        self.save(CART_COLLECTION, &state.cart)
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.read_state().map(|s| s.cart.clone()).unwrap_or_default()
    }

    /// Sum of price × quantity over the cart. Recomputed on every call,
    /// never cached.
    pub fn cart_total(&self) -> Decimal {
        self.read_state()
            .map(|s| s.cart.iter().map(CartItem::line_total).sum())
            .unwrap_or_default()
    }

    pub fn is_cart_open(&self) -> bool {
        self.read_state().map(|s| s.cart_open).unwrap_or(false)
    }

    pub fn toggle_cart(&self) {
        if let Ok(mut state) = self.state.write() {
            state.cart_open = !state.cart_open;
        }
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Queue a toast notification, returning its id. Not persisted.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> String {
        match self.state.write() {
            Ok(mut state) => state.notifications.push(message, severity, Instant::now()),
            Err(_) => String::new(),
        }
    }

    /// Dismiss a notification. Safe after the automatic expiry already
    /// removed it.
    pub fn remove_notification(&self, id: &str) {
        if let Ok(mut state) = self.state.write() {
            state.notifications.remove(id);
        }
    }

    /// Drop notifications past their deadline. Returns how many expired.
    pub fn sweep_notifications(&self) -> usize {
        self.sweep_notifications_at(Instant::now())
    }

    /// Sweep against an explicit clock, for deterministic tests.
    pub fn sweep_notifications_at(&self, now: Instant) -> usize {
        match self.state.write() {
            Ok(mut state) => state.notifications.sweep(now),
            Err(_) => 0,
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.read_state()
            .map(|s| s.notifications.entries().to_vec())
            .unwrap_or_default()
    }

    /// Spawn a background thread that sweeps expired notifications on an
    /// interval. Stop (or drop) the returned handle to shut it down.
    pub fn spawn_notification_sweeper(&self, poll_interval: Duration) -> NotificationSweeper
    where
        S: Send + Sync + 'static,
    {
        sweeper::spawn(self.clone(), poll_interval)
    }

    // =========================================================================
    // Chat
    // =========================================================================

    /// Append a message to the advisor transcript.
    pub fn add_chat_message(
        &self,
        role: ChatRole,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.chat.push(ChatMessage::now(role, content));
        self.save(CHAT_COLLECTION, &state.chat)
    }

    /// Clear the whole transcript. No confirmation.
    pub fn clear_chat(&self) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.chat.clear();
        self.save(CHAT_COLLECTION, &state.chat)
    }

    pub fn chat(&self) -> Vec<ChatMessage> {
        self.read_state().map(|s| s.chat.clone()).unwrap_or_default()
    }

    // =========================================================================
    // Audit log and UI flags
    // =========================================================================

    /// Prepend an audit entry. The log is otherwise immutable.
    pub fn add_log(&self, action: impl Into<String>) -> Result<(), StoreError> {
        let mut state = self.write_state()?;
        state.push_log(action);
        self.save(ADMIN_LOG_COLLECTION, &state.log)
    }

    pub fn log(&self) -> Vec<AuditEntry> {
        self.read_state().map(|s| s.log.clone()).unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        self.read_state().map(|s| s.language).unwrap_or_default()
    }

    pub fn set_language(&self, language: Language) {
        if let Ok(mut state) = self.state.write() {
            state.language = language;
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, State>, StoreError> {
        self.state
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, State>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }

    fn load<T: serde::de::DeserializeOwned>(
        &self,
        collection: &'static str,
    ) -> Result<Option<Vec<T>>, StoreError> {
        self.persist
            .load(collection)
            .map_err(|source| StoreError::Persist { collection, source })
    }

    fn save<T: serde::Serialize>(
        &self,
        collection: &'static str,
        items: &[T],
    ) -> Result<(), StoreError> {
        self.persist
            .save(collection, items)
            .map_err(|source| StoreError::Persist { collection, source })
    }
}
