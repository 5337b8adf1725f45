use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::language::LocalizedText;

use super::Record;

/// An essay in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalPost {
    pub id: String,
    pub title: LocalizedText,
    pub excerpt: LocalizedText,
    pub content: LocalizedText,
    pub date: NaiveDate,
    /// Free-text tags; duplicates permitted, order preserved.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Record for JournalPost {
    const COLLECTION: &'static str = "journal";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn headline(&self) -> &str {
        self.title.default_text()
    }
}
