//! Validation report structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed taxonomy of validation diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// No sample utterances at all
    MissingUtterances,
    /// No intents at all
    MissingIntentSchema,
    /// No custom (non-vendor-namespaced) intent exists
    RequiredIntentMissing,
    /// A mandatory vendor intent (help/cancel/stop) is absent
    MissingBuiltinIntent,
    /// A vendor intent has fewer samples than the configured minimum
    MinimumUtterancesNotMet,
    /// An utterance contains characters outside the allowed set
    InvalidUtteranceCharacters,
    /// A slot value contains characters outside the allowed set
    InvalidSlotCharacters,
    /// An utterance key has no matching intent
    UtterancesNotInSchema,
    /// An intent has no utterances
    IntentsWithoutUtterances,
    /// A slot type referenced by an intent is missing from the slots
    SlotNotInSchema,
    /// A slot type exists but no intent declares it
    SlotNotDeclaredOnIntent,
    /// An utterance fails to template-compile against declared slots
    TemplateSlotMismatch,
    /// An utterance references the same slot variable twice
    DuplicateSlotInUtterance,
    /// Two different intents share an identical utterance
    DuplicateUtteranceAcrossIntents,
    /// An utterance begins with a connecting word
    LeadingConnectingWord,
    /// Total utterance character volume over the ceiling
    UtteranceVolumeExceeded,
    /// Total custom slot value count over the ceiling
    SlotVolumeExceeded,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A single validation diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Diagnostic taxonomy entry
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    #[must_use]
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Accumulated result of one validation run.
///
/// Diagnostics are advisory: validation never halts compilation. A caller
/// decides from the report whether to proceed to artifact emission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Every diagnostic, in rule order
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Whether the run produced no diagnostics
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Number of diagnostics of `kind`
    #[must_use]
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Diagnostic counts per kind, in first-seen order
    #[must_use]
    pub fn kind_counts(&self) -> IndexMap<DiagnosticKind, usize> {
        let mut counts = IndexMap::new();
        for diagnostic in &self.diagnostics {
            *counts.entry(diagnostic.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Fold another report's diagnostics into this one
    pub fn merge(&mut self, other: ValidationReport) {
        self.diagnostics.extend(other.diagnostics);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return write!(f, "validation passed with no diagnostics");
        }
        writeln!(f, "{} diagnostic(s):", self.diagnostics.len())?;
        for diagnostic in &self.diagnostics {
            writeln!(f, "  [{}] {}", diagnostic.kind, diagnostic.message)?;
        }
        Ok(())
    }
}
