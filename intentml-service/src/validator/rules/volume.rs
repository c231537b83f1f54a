//! Volume ceilings
//!
//! Total utterance character volume and total custom slot value count
//! must stay under fixed ceilings.

use intentml_core::config::ValidationConfig;

use super::Rule;
use crate::validator::context::ValidationContext;
use crate::validator::report::{Diagnostic, DiagnosticKind};

/// Both volume ceilings, checked together
pub struct VolumeCeilings;

impl Rule for VolumeCeilings {
    fn name(&self) -> &'static str {
        "volume-ceilings"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        let characters: usize = context
            .utterances
            .values()
            .flatten()
            .map(|sample| sample.chars().count())
            .sum();
        if characters >= config.max_utterance_characters {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::UtteranceVolumeExceeded,
                format!(
                    "{characters} utterance characters, ceiling is {}",
                    config.max_utterance_characters
                ),
            ));
        }

        let values: usize = context.slots.values().map(Vec::len).sum();
        if values >= config.max_slot_values {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::SlotVolumeExceeded,
                format!("{values} slot values, ceiling is {}", config.max_slot_values),
            ));
        }

        diagnostics
    }
}
