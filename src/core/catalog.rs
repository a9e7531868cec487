//! # Message Catalog
//!
//! Looks up the empty-state messages shown by sections that have nothing to
//! list (e.g. "Starred" before anything has been starred).
//!
//! Lookup order for `(id, locale)`:
//!
//! 1. config overrides for `locale`
//! 2. built-in table for `locale`
//! 3. config overrides for `en-US`
//! 4. built-in `en-US`
//!
//! An id found nowhere is a `MissingTranslation`; the catalog does not invent
//! a fallback string.

use std::collections::HashMap;
use std::fmt;

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    MissingTranslation { id: String, locale: String },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::MissingTranslation { id, locale } => {
                write!(f, "no translation for {id:?} in locale {locale}")
            }
        }
    }
}

impl std::error::Error for TranslationError {}

pub trait MessageCatalog {
    fn translate(&self, id: &str, locale: &str) -> Result<String, TranslationError>;
}

const BUILTIN_EN_US: &[(&str, &str)] = &[
    ("starred-empty", "Your starred dashboards will appear here"),
    ("bookmarks-empty", "Bookmark pages for them to appear here"),
    ("recent-empty", "Dashboards you visit will appear here"),
];

const BUILTIN_DE_DE: &[(&str, &str)] = &[
    ("starred-empty", "Deine markierten Dashboards erscheinen hier"),
    ("bookmarks-empty", "Setze Lesezeichen, damit Seiten hier erscheinen"),
];

fn builtin(locale: &str) -> &'static [(&'static str, &'static str)] {
    match locale {
        "en-US" => BUILTIN_EN_US,
        "de-DE" => BUILTIN_DE_DE,
        _ => &[],
    }
}

/// Locale → (message id → text).
pub type MessageOverrides = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: MessageOverrides,
}

impl Catalog {
    pub fn new(overrides: MessageOverrides) -> Self {
        Self { overrides }
    }

    fn lookup(&self, id: &str, locale: &str) -> Option<String> {
        self.overrides
            .get(locale)
            .and_then(|messages| messages.get(id).cloned())
            .or_else(|| {
                builtin(locale)
                    .iter()
                    .find(|(key, _)| *key == id)
                    .map(|(_, text)| text.to_string())
            })
    }
}

impl MessageCatalog for Catalog {
    fn translate(&self, id: &str, locale: &str) -> Result<String, TranslationError> {
        self.lookup(id, locale)
            .or_else(|| self.lookup(id, DEFAULT_LOCALE))
            .ok_or_else(|| TranslationError::MissingTranslation {
                id: id.to_string(),
                locale: locale.to_string(),
            })
    }
}
