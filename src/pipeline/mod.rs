//! The admin content pipeline — form submission to eight-language record.
//!
//! A submission takes the admin's single-language draft, asks the external
//! generator for a localized bundle, merges it with the draft's structured
//! fields, and hands the result to the store's add-action. Failure is never
//! fatal: the draft stays populated, an error notification is queued, and
//! the visible collections are untouched.
//!
//! Per-form state machine: `Idle -> Submitting -> {Success, Failed}`.
//! Concurrent submissions from the same form are not guarded against — a
//! second call while one is in flight issues a second independent request.
//!
//! ## Example
//!
//! ```ignore
//! use atelier::{AdminPipeline, ArtworkDraft, HttpGenerator};
//!
//! let pipeline = AdminPipeline::new(HttpGenerator::from_env()?);
//! let mut draft = ArtworkDraft { title: "The Mirror".into(), ..Default::default() };
//! let artwork = pipeline.smart_add_artwork(&store, &mut draft).await?;
//! ```

mod access;
mod draft;

use std::fmt;
use std::sync::RwLock;

use chrono::Utc;

use crate::audit::ChatRole;
use crate::content::{new_record_id, Artwork, Book, JournalPost};
use crate::generator::{ContentKind, Generator, GeneratorError, LocalizeRequest};
use crate::notify::Severity;
use crate::persist::CollectionStore;
use crate::store::{Store, StoreError};
use crate::sync::Mirror;

pub use access::AdminGate;
pub use draft::{ArtworkDraft, BookDraft, JournalDraft};

/// Error type for pipeline operations.
#[derive(Debug)]
pub enum PipelineError {
    /// The generator call failed or answered with something unusable.
    Generator(GeneratorError),
    /// The store rejected the mutation (persistence write-through failed).
    Store(StoreError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Generator(e) => write!(f, "generator failed: {}", e),
            PipelineError::Store(e) => write!(f, "store failed: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Generator(e) => Some(e),
            PipelineError::Store(e) => Some(e),
        }
    }
}

impl From<GeneratorError> for PipelineError {
    fn from(err: GeneratorError) -> Self {
        PipelineError::Generator(err)
    }
}

impl From<StoreError> for PipelineError {
    fn from(err: StoreError) -> Self {
        PipelineError::Store(err)
    }
}

/// Where the latest submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// The form-to-AI-to-persistence workflow.
pub struct AdminPipeline<G> {
    generator: G,
    mirror: Option<Mirror>,
    state: RwLock<SubmissionState>,
}

impl<G: Generator> AdminPipeline<G> {
    pub fn new(generator: G) -> Self {
        AdminPipeline {
            generator,
            mirror: None,
            state: RwLock::new(SubmissionState::Idle),
        }
    }

    /// Attach a best-effort gateway mirror; adds and removes are pushed to
    /// it in the background.
    pub fn with_mirror(mut self, mirror: Mirror) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// The state of the most recent submission.
    pub fn submission_state(&self) -> SubmissionState {
        self.state.read().map(|s| *s).unwrap_or_default()
    }

    fn set_state(&self, state: SubmissionState) {
        if let Ok(mut current) = self.state.write() {
            *current = state;
        }
    }

    // =========================================================================
    // Smart add
    // =========================================================================

    /// Localize and publish an artwork from a draft.
    ///
    /// An empty title is a no-op (`Ok(None)`) — the submit button is simply
    /// inert. On success the draft is cleared and the created record
    /// returned; on failure the draft is left intact.
    pub async fn smart_add_artwork<S: CollectionStore>(
        &self,
        store: &Store<S>,
        draft: &mut ArtworkDraft,
    ) -> Result<Option<Artwork>, PipelineError> {
        if draft.title.trim().is_empty() {
            return Ok(None);
        }
        self.set_state(SubmissionState::Submitting);

        let request = LocalizeRequest {
            kind: ContentKind::Artwork,
            title: draft.title.clone(),
            body: draft.description.clone(),
            extra: format!("Category: {}, Year: {}", draft.category, draft.year),
        };
        let mut bundle = match self.generator.localize(request).await {
            Ok(bundle) => bundle,
            Err(e) => return Err(self.submission_failed(store, e)),
        };

        let artwork = Artwork {
            id: new_record_id(),
            title: bundle.take_or("title", &draft.title),
            description: bundle.take_or("description", &draft.description),
            technique: bundle.take("technique"),
            year: draft.year,
            category: draft.category,
            image_url: or_placeholder(&draft.image_url, 600, 800),
            featured: false,
            dimensions: None,
        };

        if let Err(e) = store.add_artwork(artwork.clone()) {
            return Err(self.submission_failed(store, e));
        }
        if let Some(mirror) = &self.mirror {
            mirror.spawn_push(artwork.clone());
        }

        draft.clear();
        store.notify("Artwork translated and published", Severity::Success);
        self.set_state(SubmissionState::Success);
        Ok(Some(artwork))
    }

    /// Localize and publish a book from a draft. Same contract as
    /// [`smart_add_artwork`](Self::smart_add_artwork).
    pub async fn smart_add_book<S: CollectionStore>(
        &self,
        store: &Store<S>,
        draft: &mut BookDraft,
    ) -> Result<Option<Book>, PipelineError> {
        if draft.title.trim().is_empty() {
            return Ok(None);
        }
        self.set_state(SubmissionState::Submitting);

        let request = LocalizeRequest {
            kind: ContentKind::Book,
            title: draft.title.clone(),
            body: draft.description.clone(),
            extra: String::new(),
        };
        let mut bundle = match self.generator.localize(request).await {
            Ok(bundle) => bundle,
            Err(e) => return Err(self.submission_failed(store, e)),
        };

        let book = Book {
            id: new_record_id(),
            title: bundle.take_or("title", &draft.title),
            subtitle: bundle.take("subtitle"),
            description: bundle.take_or("description", &draft.description),
            price: draft.price.max(rust_decimal::Decimal::ZERO),
            cover_url: or_placeholder(&draft.cover_url, 400, 600),
            pages: draft.pages,
            publish_date: Utc::now(),
        };

        if let Err(e) = store.add_book(book.clone()) {
            return Err(self.submission_failed(store, e));
        }
        if let Some(mirror) = &self.mirror {
            mirror.spawn_push(book.clone());
        }

        draft.clear();
        store.notify("Book translated and added to the library", Severity::Success);
        self.set_state(SubmissionState::Success);
        Ok(Some(book))
    }

    /// Localize and publish a journal post from a draft. Same contract as
    /// [`smart_add_artwork`](Self::smart_add_artwork).
    pub async fn smart_add_journal<S: CollectionStore>(
        &self,
        store: &Store<S>,
        draft: &mut JournalDraft,
    ) -> Result<Option<JournalPost>, PipelineError> {
        if draft.title.trim().is_empty() {
            return Ok(None);
        }
        self.set_state(SubmissionState::Submitting);

        let request = LocalizeRequest {
            kind: ContentKind::Journal,
            title: draft.title.clone(),
            body: draft.body.clone(),
            extra: String::new(),
        };
        let mut bundle = match self.generator.localize(request).await {
            Ok(bundle) => bundle,
            Err(e) => return Err(self.submission_failed(store, e)),
        };

        let post = JournalPost {
            id: new_record_id(),
            title: bundle.take_or("title", &draft.title),
            excerpt: bundle.take_or("excerpt", &draft.body),
            content: bundle.take_or("content", &draft.body),
            date: Utc::now().date_naive(),
            tags: draft.tag_list(),
        };

        if let Err(e) = store.add_journal(post.clone()) {
            return Err(self.submission_failed(store, e));
        }
        if let Some(mirror) = &self.mirror {
            mirror.spawn_push(post.clone());
        }

        draft.clear();
        store.notify("Post generated, translated and published", Severity::Success);
        self.set_state(SubmissionState::Success);
        Ok(Some(post))
    }

    // =========================================================================
    // Removal (store + mirror)
    // =========================================================================

    pub fn remove_artwork<S: CollectionStore>(
        &self,
        store: &Store<S>,
        id: &str,
    ) -> Result<(), PipelineError> {
        store.remove_artwork(id)?;
        if let Some(mirror) = &self.mirror {
            mirror.spawn_delete::<Artwork>(id);
        }
        Ok(())
    }

    pub fn remove_book<S: CollectionStore>(
        &self,
        store: &Store<S>,
        id: &str,
    ) -> Result<(), PipelineError> {
        store.remove_book(id)?;
        if let Some(mirror) = &self.mirror {
            mirror.spawn_delete::<Book>(id);
        }
        Ok(())
    }

    pub fn remove_journal<S: CollectionStore>(
        &self,
        store: &Store<S>,
        id: &str,
    ) -> Result<(), PipelineError> {
        store.remove_journal(id)?;
        if let Some(mirror) = &self.mirror {
            mirror.spawn_delete::<JournalPost>(id);
        }
        Ok(())
    }

    // =========================================================================
    // Advisor chat
    // =========================================================================

    /// Ask the strategic advisor a question.
    ///
    /// The user message is appended to the transcript first; the context
    /// handed to the generator is the collection counts plus the last five
    /// messages before this one. On failure the transcript keeps the user
    /// message and an error notification is queued.
    pub async fn ask_advisor<S: CollectionStore>(
        &self,
        store: &Store<S>,
        query: &str,
    ) -> Result<Option<String>, PipelineError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let context = advisor_context(store);
        store.add_chat_message(ChatRole::User, query)?;

        match self.generator.advise(query, &context).await {
            Ok(reply) => {
                store.add_chat_message(ChatRole::Assistant, reply.clone())?;
                Ok(Some(reply))
            }
            Err(e) => {
                store.notify("Advisor is not responding", Severity::Error);
                Err(e.into())
            }
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn submission_failed<S: CollectionStore>(
        &self,
        store: &Store<S>,
        error: impl Into<PipelineError>,
    ) -> PipelineError {
        let error = error.into();
        tracing::warn!(error = %error, "smart add failed");
        store.notify("Generation failed — nothing was saved", Severity::Error);
        self.set_state(SubmissionState::Failed);
        error
    }
}

/// Site status summary handed to the advisor.
fn advisor_context<S: CollectionStore>(store: &Store<S>) -> String {
    let history = store
        .chat()
        .iter()
        .rev()
        .take(5)
        .rev()
        .map(|m| {
            let who = match m.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            format!("{}: {}", who, m.content)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "The site has {} artworks, {} books and {} journal posts.\nChat history:\n{}",
        store.artworks().len(),
        store.books().len(),
        store.journal().len(),
        history,
    )
}

fn or_placeholder(uploaded: &str, width: u32, height: u32) -> String {
    if uploaded.is_empty() {
        format!(
            "https://picsum.photos/{}/{}?random={}",
            width,
            height,
            uuid::Uuid::new_v4()
        )
    } else {
        uploaded.to_string()
    }
}
