//! Languages and localized text values.
//!
//! Every textual field on a content record is a [`LocalizedText`]: a
//! required default (the base language, English) plus optional per-language
//! variants. Lookup goes through [`LocalizedText::resolve`], which falls
//! back to the default when a variant is absent or empty — absence is
//! normal, never an error.
//!
//! ## Example
//!
//! ```ignore
//! use atelier::{Language, LocalizedText};
//!
//! let title = LocalizedText::new("The Mirror").with(Language::Fr, "Le Miroir");
//! assert_eq!(title.resolve(Language::Fr), "Le Miroir");
//! assert_eq!(title.resolve(Language::De), "The Mirror");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A language supported by the site.
///
/// `En` is the base language: it is stored as the default text of a
/// [`LocalizedText`], never as a variant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fa,
    Fr,
    De,
    Ru,
    Tr,
    Ar,
    Zh,
}

impl Language {
    /// All supported languages, base language first.
    pub const ALL: [Language; 8] = [
        Language::En,
        Language::Fa,
        Language::Fr,
        Language::De,
        Language::Ru,
        Language::Tr,
        Language::Ar,
        Language::Zh,
    ];

    /// The base language. Unsuffixed fields and default texts are in this
    /// language.
    pub const fn base() -> Language {
        Language::En
    }

    /// The two-letter code used in wire formats and field suffixes.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Ru => "ru",
            Language::Tr => "tr",
            Language::Ar => "ar",
            Language::Zh => "zh",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::base()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "fa" => Ok(Language::Fa),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            "ru" => Ok(Language::Ru),
            "tr" => Ok(Language::Tr),
            "ar" => Ok(Language::Ar),
            "zh" => Ok(Language::Zh),
            _ => Err(()),
        }
    }
}

/// A text value with a required default and optional per-language overrides.
///
/// Serializes as a flat map: `{"default": "...", "fr": "...", ...}`.
/// The variant map never holds the base language — setting a variant for
/// [`Language::En`] replaces the default instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    default: String,
    #[serde(flatten)]
    variants: BTreeMap<Language, String>,
}

impl LocalizedText {
    /// Create a localized text with only the default variant.
    pub fn new(default: impl Into<String>) -> Self {
        LocalizedText {
            default: default.into(),
            variants: BTreeMap::new(),
        }
    }

    /// Builder-style variant assignment.
    pub fn with(mut self, lang: Language, text: impl Into<String>) -> Self {
        self.set(lang, text);
        self
    }

    /// Set the text for a language. The base language replaces the default.
    pub fn set(&mut self, lang: Language, text: impl Into<String>) {
        if lang == Language::base() {
            self.default = text.into();
        } else {
            self.variants.insert(lang, text.into());
        }
    }

    /// The default (base language) text.
    pub fn default_text(&self) -> &str {
        &self.default
    }

    /// The raw variant for a language, if one was set. The base language
    /// always answers with the default.
    pub fn get(&self, lang: Language) -> Option<&str> {
        if lang == Language::base() {
            Some(&self.default)
        } else {
            self.variants.get(&lang).map(|s| s.as_str())
        }
    }

    /// Resolve the text for a language, falling back to the default when the
    /// variant is absent or empty.
    pub fn resolve(&self, lang: Language) -> &str {
        match self.get(lang) {
            Some(text) if !text.is_empty() => text,
            _ => &self.default,
        }
    }

    /// True when no text at all was provided.
    pub fn is_empty(&self) -> bool {
        self.default.is_empty() && self.variants.values().all(|v| v.is_empty())
    }
}

impl From<&str> for LocalizedText {
    fn from(default: &str) -> Self {
        LocalizedText::new(default)
    }
}
