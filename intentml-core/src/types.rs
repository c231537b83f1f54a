//! Type definitions for ingested sheets and the intermediate representation
//!
//! The intermediate representation ([`ModelDefinition`]) is built once per
//! compilation run from an immutable sheet snapshot and is read-only to all
//! platform generators; generators derive filtered views, they never mutate
//! shared state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

use crate::locale::Locale;

/// Semantic role assigned to a sheet from its title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheetRole {
    /// Custom slot type values (`LIST_OF_` sheets)
    Slots,
    /// Intent definitions
    Intents,
    /// Sample utterances, one column per intent
    Utterances,
    /// Invocation names per (locale, environment)
    Invocations,
    /// Localized response copy addressed by dotted path
    Views,
    /// Pass-through content blobs
    Downloads,
    /// Publishing rows that apply to every locale
    PublishingGeneral,
    /// Publishing rows carrying a `{locale}` placeholder
    PublishingLocale,
    /// Publishing rows scoped to named environments
    PublishingEnvironments,
    /// Sheet matched no naming convention; dropped from processing
    Unclassified,
}

impl SheetRole {
    /// Whether this role feeds the publishing reducer
    #[must_use]
    pub fn is_publishing(self) -> bool {
        matches!(
            self,
            Self::PublishingGeneral | Self::PublishingLocale | Self::PublishingEnvironments
        )
    }
}

/// A raw sheet as handed over by the (external) retrieval collaborators.
///
/// Row 0 of `grid` is the header row. The compiler classifies the role
/// itself; callers must not pre-assign one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSource {
    /// Identifier of the spreadsheet this sheet came from
    pub source_id: String,
    /// Title of the spreadsheet
    pub source_title: String,
    /// Title of the sheet within the spreadsheet
    pub sheet_title: String,
    /// Raw 2-D grid of cell strings, header row first
    pub grid: Vec<Vec<String>>,
}

/// A cell value after normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Empty or whitespace-only cell; treated as absent
    Empty,
    /// Boolean-like token (`true`/`yes`/`false`/`no`)
    Bool(bool),
    /// Any other cell content, trimmed
    Text(String),
}

impl CellValue {
    /// Coerce a raw cell string.
    ///
    /// Case-insensitive `true`/`yes` become `Bool(true)`, `false`/`no`
    /// become `Bool(false)`, empty or whitespace-only strings become
    /// `Empty`. Idempotent over the string renderings of its own output.
    #[must_use]
    pub fn coerce(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.to_lowercase().as_str() {
            "true" | "yes" => Self::Bool(true),
            "false" | "no" => Self::Bool(false),
            _ => Self::Text(trimmed.to_string()),
        }
    }

    /// Whether the cell is absent
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Text content, if any
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean content; `Empty` and text cells read as `false`
    #[must_use]
    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

/// One normalized data row: every header key present, in header order
pub type NormalizedRow = IndexMap<String, CellValue>;

/// A classified, normalized sheet; immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    /// Identifier of the spreadsheet this sheet came from
    pub source_id: String,
    /// Title of the spreadsheet
    pub source_title: String,
    /// Title of the sheet within the spreadsheet
    pub sheet_title: String,
    /// Semantic role from the naming-convention table
    pub role: SheetRole,
    /// Normalized data rows, header row dropped
    pub rows: Vec<NormalizedRow>,
}

impl Sheet {
    /// Text content of the cell at `key` in `row`, if present
    #[must_use]
    pub fn cell<'a>(row: &'a NormalizedRow, key: &str) -> Option<&'a str> {
        row.get(key).and_then(CellValue::as_str)
    }
}

/// A slot declared on an intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDefinition {
    /// Variable name referenced by `{name}` in samples
    pub name: String,
    /// Slot type, e.g. `LIST_OF_COUNTRIES` or `AMAZON.NUMBER`
    #[serde(rename = "type")]
    pub slot_type: String,
}

/// An intent with its samples and per-platform metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent name, unique within a locale
    pub name: String,
    /// Sample utterances in sheet order; uniqueness not enforced here
    #[serde(default)]
    pub samples: Vec<String>,
    /// Slots declared on the intent
    #[serde(default)]
    pub slots: Vec<SlotDefinition>,
    /// Whether the intent participates in can-fulfill resolution
    #[serde(default)]
    pub can_fulfill_intent: bool,
    /// Whether the intent starts a conversation (Dialogflow `startIntents`)
    #[serde(default)]
    pub start_intent: bool,
    /// Whether the intent ends a conversation (Dialogflow `endIntentIds`)
    #[serde(default)]
    pub end_intent: bool,
    /// Whether the intent requires an authenticated user
    #[serde(default)]
    pub sign_in_required: bool,
    /// Platform events that trigger the intent
    #[serde(default)]
    pub events: Vec<String>,
    /// Environments the intent is limited to; empty means all
    #[serde(default)]
    pub environments: BTreeSet<String>,
    /// Platforms the intent is limited to; empty means all
    #[serde(default)]
    pub platforms: BTreeSet<String>,
    /// Locale the intent was authored for
    pub locale: Locale,
}

/// One canonical value of a custom slot type with its synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotValue {
    /// Canonical value; unique within its slot
    pub value: String,
    /// Synonyms resolving to the canonical value
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// A custom slot type (entity) with its value set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Locale the values were authored for
    pub locale: Locale,
    /// Slot type name, taken from the sheet title
    pub name: String,
    /// Canonical values in sheet order
    pub values: Vec<SlotValue>,
}

/// A spoken invocation name for one (locale, environment) pairing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Locale the invocation applies to
    pub locale: Locale,
    /// Environment the invocation applies to
    pub environment: String,
    /// Spoken name
    pub name: String,
}

/// Localized response copy for one locale, nested by dotted path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Locale of the copy
    pub locale: Locale,
    /// Nested key/value tree; array leaves hold alternate phrasings
    pub data: Value,
}

/// A pass-through content blob keyed by locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Download {
    /// Resource name, taken from the sheet title without its prefix
    pub name: String,
    /// Locale of the content
    pub locale: Locale,
    /// Row records, passed through untouched
    pub data: Vec<Value>,
}

/// One publishing row feeding the per-platform manifest merge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishingInfo {
    /// Dotted path, platform-namespaced, may contain `[]` array markers
    pub key: String,
    /// Value to assign or append at the path
    pub value: Value,
    /// Environments the row is limited to; empty means all
    #[serde(default)]
    pub environments: BTreeSet<String>,
}

/// The intermediate representation consumed by validation and all
/// platform generators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// All intents across locales
    #[serde(default)]
    pub intents: Vec<Intent>,
    /// All custom slot types across locales
    #[serde(default)]
    pub slots: Vec<Slot>,
    /// Localized view trees
    #[serde(default)]
    pub views: Vec<View>,
    /// Content blobs
    #[serde(default)]
    pub downloads: Vec<Download>,
    /// Invocation names driving which artifact sets are produced
    #[serde(default)]
    pub invocations: Vec<Invocation>,
    /// Publishing rows for manifest merges
    #[serde(default)]
    pub publishing: Vec<PublishingInfo>,
}

impl ModelDefinition {
    /// Custom slot types authored for `locale`, in sheet order
    #[must_use]
    pub fn slots_for(&self, locale: &Locale) -> Vec<&Slot> {
        self.slots.iter().filter(|s| &s.locale == locale).collect()
    }

    /// Distinct (locale, environment) pairs, in invocation order
    #[must_use]
    pub fn invocation_pairs(&self) -> Vec<(&Locale, &str)> {
        let mut seen = BTreeSet::new();
        let mut pairs = Vec::new();
        for invocation in &self.invocations {
            let key = (invocation.locale.tag().to_string(), invocation.environment.clone());
            if seen.insert(key) {
                pairs.push((&invocation.locale, invocation.environment.as_str()));
            }
        }
        pairs
    }

    /// The invocation name for a (locale, environment) pair, if declared
    #[must_use]
    pub fn invocation_name(&self, locale: &Locale, environment: &str) -> Option<&str> {
        self.invocations
            .iter()
            .find(|i| &i.locale == locale && i.environment == environment)
            .map(|i| i.name.as_str())
    }
}
