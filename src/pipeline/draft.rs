//! Form drafts for the admin dashboard.
//!
//! A draft holds what the admin typed before the generator call. On success
//! the pipeline clears it; on failure it is left populated for retry.

use chrono::{Datelike, Utc};
use rust_decimal::Decimal;

use crate::content::Category;

/// Draft for a new artwork.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub year: i32,
    /// Uploaded image reference; a placeholder is used when empty.
    pub image_url: String,
}

impl Default for ArtworkDraft {
    fn default() -> Self {
        ArtworkDraft {
            title: String::new(),
            description: String::new(),
            category: Category::Painting,
            year: Utc::now().year(),
            image_url: String::new(),
        }
    }
}

impl ArtworkDraft {
    pub fn clear(&mut self) {
        *self = ArtworkDraft::default();
    }
}

/// Draft for a new book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub pages: u32,
    /// Uploaded cover reference; a placeholder is used when empty.
    pub cover_url: String,
}

impl BookDraft {
    pub fn clear(&mut self) {
        *self = BookDraft::default();
    }
}

/// Draft for a new journal post.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalDraft {
    pub title: String,
    pub body: String,
    /// Comma-separated tag input, split on submit.
    pub tags: String,
}

impl JournalDraft {
    pub fn clear(&mut self) {
        *self = JournalDraft::default();
    }

    /// The tag input split into trimmed, non-empty tags, order preserved.
    pub fn tag_list(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }
}
