//! Character-set rule
//!
//! Samples and slot values must stay within a restricted character set:
//! letters, digits, space, a fixed accented-character allowlist, braces,
//! apostrophe, underscore, hyphen and period.

use intentml_core::config::ValidationConfig;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Rule;
use crate::validator::context::ValidationContext;
use crate::validator::report::{Diagnostic, DiagnosticKind};

static ALLOWED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-Za-z \{\}'_.\-àâäçèéêëîïôöùûüñÀÂÄÇÈÉÊËÎÏÔÖÙÛÜÑ]*$")
        .expect("allowed-character pattern compiles")
});

/// Every utterance and slot value string must match the allowed set
pub struct CharacterSet;

impl Rule for CharacterSet {
    fn name(&self) -> &'static str {
        "character-set"
    }

    fn check(&self, context: &ValidationContext, _config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (intent, samples) in &context.utterances {
            for sample in samples {
                if !ALLOWED.is_match(sample) {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::InvalidUtteranceCharacters,
                        format!("utterance \"{sample}\" for {intent} contains invalid characters"),
                    ));
                }
            }
        }
        for (slot, values) in &context.slots {
            for value in values {
                if !ALLOWED.is_match(value) {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::InvalidSlotCharacters,
                        format!("slot value \"{value}\" in {slot} contains invalid characters"),
                    ));
                }
            }
        }
        diagnostics
    }
}
