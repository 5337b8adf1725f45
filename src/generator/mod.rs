//! The external generator — an opaque remote text/JSON producer.
//!
//! The admin pipeline hands it a single-language form submission and gets
//! back an eight-language bundle, as one flat JSON object with base fields
//! plus language-suffixed variants (`title`, `title_fa`, `title_fr`, …).
//! There is no partial-success contract: any malformed response is total
//! failure and the caller recovers locally.

mod http;

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::language::{Language, LocalizedText};

pub use http::{HttpGenerator, API_KEY_ENV};

/// Error type for generator calls.
#[derive(Debug)]
pub enum GeneratorError {
    /// Network-level failure — the generator was unreachable.
    Transport(String),
    /// The generator answered with a non-OK status.
    BadStatus(u16),
    /// The response body could not be parsed as the expected JSON shape.
    Malformed(String),
    /// Required configuration (API key) is missing.
    Unconfigured(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Transport(msg) => write!(f, "generator unreachable: {}", msg),
            GeneratorError::BadStatus(status) => {
                write!(f, "generator answered with status {}", status)
            }
            GeneratorError::Malformed(msg) => write!(f, "malformed generator response: {}", msg),
            GeneratorError::Unconfigured(msg) => write!(f, "generator not configured: {}", msg),
        }
    }
}

impl std::error::Error for GeneratorError {}

impl From<reqwest::Error> for GeneratorError {
    fn from(err: reqwest::Error) -> Self {
        GeneratorError::Transport(err.to_string())
    }
}

/// Which content type a localization request is for. Determines the set of
/// textual fields the generator is asked to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Artwork,
    Book,
    Journal,
}

impl ContentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ContentKind::Artwork => "artwork",
            ContentKind::Book => "book",
            ContentKind::Journal => "journal",
        }
    }

    /// The textual fields the generator localizes for this kind.
    pub const fn text_fields(self) -> &'static [&'static str] {
        match self {
            ContentKind::Artwork => &["title", "description", "technique"],
            ContentKind::Book => &["title", "subtitle", "description"],
            ContentKind::Journal => &["title", "excerpt", "content"],
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A localization request: one content type, the admin's title and body,
/// plus free-text extra context (category, year, …).
#[derive(Debug, Clone)]
pub struct LocalizeRequest {
    pub kind: ContentKind,
    pub title: String,
    pub body: String,
    pub extra: String,
}

/// The generator's answer: one [`LocalizedText`] per textual field.
#[derive(Debug, Clone, Default)]
pub struct LocalizedBundle {
    fields: BTreeMap<String, LocalizedText>,
}

impl LocalizedBundle {
    /// Parse the generator's flat suffixed JSON object for the given kind.
    ///
    /// Unknown keys are ignored; a field appears in the bundle when its
    /// base key or any suffixed variant is present. Anything that is not a
    /// JSON object is a malformed response.
    pub fn from_flat_json(kind: ContentKind, text: &str) -> Result<Self, GeneratorError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| GeneratorError::Malformed(e.to_string()))?;
        let object = value
            .as_object()
            .ok_or_else(|| GeneratorError::Malformed("expected a JSON object".into()))?;

        let mut fields = BTreeMap::new();
        for &field in kind.text_fields() {
            let base = object.get(field).and_then(Value::as_str);
            let mut localized = LocalizedText::new(base.unwrap_or_default());
            let mut seen = base.is_some();

            for lang in Language::ALL.iter().skip(1) {
                let key = format!("{}_{}", field, lang.code());
                if let Some(variant) = object.get(&key).and_then(Value::as_str) {
                    localized.set(*lang, variant);
                    seen = true;
                }
            }

            if seen {
                fields.insert(field.to_string(), localized);
            }
        }

        Ok(LocalizedBundle { fields })
    }

    pub fn get(&self, field: &str) -> Option<&LocalizedText> {
        self.fields.get(field)
    }

    /// Take a field out of the bundle, or build one from the fallback text.
    pub fn take_or(&mut self, field: &str, fallback: &str) -> LocalizedText {
        self.fields
            .remove(field)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| LocalizedText::new(fallback))
    }

    /// Take an optional field out of the bundle.
    pub fn take(&mut self, field: &str) -> Option<LocalizedText> {
        self.fields.remove(field).filter(|text| !text.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// The external generator collaborator.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Produce an eight-language bundle for a new record.
    async fn localize(&self, request: LocalizeRequest) -> Result<LocalizedBundle, GeneratorError>;

    /// Answer a strategic-advisor query against the given site context.
    async fn advise(&self, query: &str, context: &str) -> Result<String, GeneratorError>;
}

/// Strip markdown code fences the generator sometimes wraps JSON in.
pub(crate) fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// The translation prompt, mirroring the content engine's house style.
pub(crate) fn localize_prompt(request: &LocalizeRequest) -> String {
    let field_list = request
        .kind
        .text_fields()
        .iter()
        .map(|f| format!("\"{f}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let suffixes = Language::ALL
        .iter()
        .skip(1)
        .map(|l| l.code())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "You are the content engine for a multilingual high-end art website.\n\
         I will provide a title and description/context for a new {kind}.\n\
         \n\
         Your task:\n\
         1. Write the fields {fields} in English and translate each into: {suffixes}.\n\
         2. Ensure the tone is academic, philosophical, and sophisticated.\n\
         3. Use the unsuffixed field name for English; append the language code for \
         other languages (e.g. title_fr, description_ru).\n\
         4. Return ONLY a valid flat JSON object. Do not include markdown formatting.\n\
         \n\
         Input Title: {title}\n\
         Input Context/Description: {body}\n\
         Extra Info: {extra}\n",
        kind = request.kind,
        fields = field_list,
        suffixes = suffixes,
        title = request.title,
        body = request.body,
        extra = request.extra,
    )
}

/// The strategic-advisor prompt.
pub(crate) fn advise_prompt(query: &str, context: &str) -> String {
    format!(
        "You are the strategic advisor for a world-renowned Professor of Philosophy \
         and Artist.\n\
         Context of current site status: {context}.\n\
         \n\
         The user asks: \"{query}\"\n\
         \n\
         Provide a concise, professional, and actionable strategy or answer \
         (max 150 words). Reply in the language the question was asked in.\n",
    )
}
