//! Template rules: slot references in utterances must compile

use intentml_core::config::ValidationConfig;

use super::Rule;
use crate::template;
use crate::validator::context::ValidationContext;
use crate::validator::report::{Diagnostic, DiagnosticKind};

/// When any custom intent declares slots, every utterance must
/// template-compile against its intent's declared slot names
pub struct TemplateCompile;

impl Rule for TemplateCompile {
    fn name(&self) -> &'static str {
        "template-compile"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        let any_custom_slots = context
            .custom_intents(&config.built_in_prefix)
            .iter()
            .any(|intent| !intent.slots.is_empty());
        if !any_custom_slots {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for (intent_name, samples) in &context.utterances {
            let Some(intent) = context.intent(intent_name) else {
                // Parity rule reports stray utterance keys.
                continue;
            };
            let declared: Vec<&str> = intent.slots.iter().map(|s| s.name.as_str()).collect();
            for sample in samples {
                if let Err(error) = template::check(sample, &declared) {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::TemplateSlotMismatch,
                        format!("{intent_name}: {error}"),
                    ));
                }
            }
        }
        diagnostics
    }
}

/// No utterance may reference the same declared slot variable twice
pub struct DuplicateSlotReference;

impl Rule for DuplicateSlotReference {
    fn name(&self) -> &'static str {
        "duplicate-slot-reference"
    }

    fn check(&self, context: &ValidationContext, _config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (intent_name, samples) in &context.utterances {
            for sample in samples {
                let Ok(variables) = template::variables(sample) else {
                    // Unparseable templates are the compile rule's concern.
                    continue;
                };
                let mut seen = std::collections::BTreeSet::new();
                for variable in variables {
                    if !seen.insert(variable.clone()) {
                        diagnostics.push(Diagnostic::new(
                            DiagnosticKind::DuplicateSlotInUtterance,
                            format!(
                                "utterance \"{sample}\" for {intent_name} references {{{variable}}} twice"
                            ),
                        ));
                        break;
                    }
                }
            }
        }
        diagnostics
    }
}
