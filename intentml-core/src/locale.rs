//! Locale tags and the fixed locale table
//!
//! Sheets and spreadsheets carry their locale in their titles ("VIEWS_FILE",
//! "INTENT-en-GB", "Production es"). Resolution against the table is
//! best-effort and always succeeds by falling back to the table's first
//! entry; explicit construction of a [`Locale`] from a tag is strict and
//! fails with [`IntentMLError::InvalidLocale`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IntentMLError, Result};

/// Locale tags recognized out of the box, in preference order.
///
/// The first entry doubles as the fallback for titles that match nothing.
pub const DEFAULT_LOCALES: &[&str] = &[
    "en-US", "en-GB", "en-CA", "en-AU", "en-IN", "de-DE", "fr-FR", "fr-CA", "ja-JP", "es-ES",
    "es-MX", "es-US", "it-IT", "pt-BR",
];

/// A validated locale tag such as `en-US`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Construct a locale from a tag, validating it against `table`
    ///
    /// # Errors
    ///
    /// Returns `IntentMLError::InvalidLocale` if `tag` is not in the table.
    pub fn new(tag: impl Into<String>, table: &LocaleTable) -> Result<Self> {
        let tag = tag.into();
        if table.contains(&tag) {
            Ok(Self(tag))
        } else {
            Err(IntentMLError::InvalidLocale {
                locale: tag,
                available: table.tags().join(", "),
            })
        }
    }

    /// The full tag, e.g. `en-US`
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }

    /// The language part of the tag, e.g. `en`
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered table of recognized locales
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    tags: Vec<String>,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            tags: DEFAULT_LOCALES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl LocaleTable {
    /// Build a table from an ordered list of tags
    ///
    /// # Errors
    ///
    /// Returns `IntentMLError::ConfigError` if `tags` is empty; the table
    /// needs at least one entry to serve as the fallback locale.
    pub fn new(tags: Vec<String>) -> Result<Self> {
        if tags.is_empty() {
            return Err(IntentMLError::ConfigError(
                "locale table must contain at least one tag".to_string(),
            ));
        }
        Ok(Self { tags })
    }

    /// All tags in preference order
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Whether `tag` is in the table (case-insensitive)
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// The fallback locale: the table's first entry
    #[must_use]
    pub fn fallback(&self) -> Locale {
        Locale(self.tags[0].clone())
    }

    /// Best-effort resolution of a locale from a sheet or spreadsheet title.
    ///
    /// Exact tag substring match wins first, in table order; failing that, a
    /// language-prefix match ("de" in "INTENT de"); failing that, the
    /// fallback entry. Matching is case-insensitive.
    #[must_use]
    pub fn resolve_title(&self, title: &str) -> Locale {
        self.try_resolve_title(title)
            .unwrap_or_else(|| self.fallback())
    }

    /// Like [`Self::resolve_title`] but without the fallback: `None` when
    /// the title names no locale at all.
    #[must_use]
    pub fn try_resolve_title(&self, title: &str) -> Option<Locale> {
        let lowered = title.to_lowercase();
        for tag in &self.tags {
            if lowered.contains(&tag.to_lowercase()) {
                return Some(Locale(tag.clone()));
            }
        }
        for tag in &self.tags {
            let language = tag.split('-').next().unwrap_or(tag).to_lowercase();
            if lowered
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|word| word == language)
            {
                return Some(Locale(tag.clone()));
            }
        }
        None
    }
}
