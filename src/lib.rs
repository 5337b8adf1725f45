//! atelier — content engine for a multilingual artist portfolio site.
//!
//! The pieces, leaves first:
//!
//! - [`Language`] / [`LocalizedText`] — per-language text with fallback to
//!   a required default.
//! - [`Record`] types — [`Artwork`], [`Book`], [`JournalPost`] — the three
//!   content collections.
//! - [`CollectionStore`] — persistence adapter: one JSON blob per
//!   collection, in memory or on disk.
//! - [`Store`] — the client store: single authoritative holder of all
//!   mutable state (collections, cart, notifications, audit log, chat).
//! - [`AdminPipeline`] — form submission → external [`Generator`] →
//!   eight-language record → store.
//! - [`gateway`] — the thin CRUD service (axum, behind the `gateway`
//!   feature) plus its client, and [`sync`] for startup hydration and
//!   best-effort mirroring.
//!
//! ## Example
//!
//! ```ignore
//! use atelier::{
//!     AdminPipeline, ArtworkDraft, FileCollectionStore, HttpGenerator, Store,
//! };
//!
//! let store = Store::new(FileCollectionStore::open("./data")?);
//! store.hydrate()?;
//!
//! let pipeline = AdminPipeline::new(HttpGenerator::from_env()?);
//! let mut draft = ArtworkDraft { title: "The Mirror".into(), ..Default::default() };
//! pipeline.smart_add_artwork(&store, &mut draft).await?;
//! ```

mod audit;
mod cart;
mod content;
pub mod gateway;
mod generator;
mod language;
mod notify;
mod persist;
mod pipeline;
mod store;
pub mod sync;

pub use audit::{AuditEntry, ChatMessage, ChatRole};
pub use cart::CartItem;
pub use content::{new_record_id, Artwork, Book, Category, JournalPost, Record};
pub use generator::{
    ContentKind, Generator, GeneratorError, HttpGenerator, LocalizeRequest, LocalizedBundle,
    API_KEY_ENV,
};
pub use language::{Language, LocalizedText};
pub use notify::{Notification, NotificationQueue, Severity, DEFAULT_NOTIFICATION_TTL};
pub use persist::{
    CollectionStore, CollectionStoreExt, FileCollectionStore, InMemoryCollectionStore,
    PersistError,
};
pub use pipeline::{
    AdminGate, AdminPipeline, ArtworkDraft, BookDraft, JournalDraft, PipelineError,
    SubmissionState,
};
pub use store::{
    NotificationSweeper, Store, StoreError, ADMIN_LOG_COLLECTION, CART_COLLECTION,
    CHAT_COLLECTION,
};
