use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::language::LocalizedText;

use super::Record;

/// A title in the bookstore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<LocalizedText>,
    pub description: LocalizedText,
    /// Non-negative; the store does not validate, the admin pipeline does.
    pub price: Decimal,
    pub cover_url: String,
    pub pages: u32,
    pub publish_date: DateTime<Utc>,
}

impl Record for Book {
    const COLLECTION: &'static str = "books";

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
