//! Coverage rules: utterance/intent parity and slot parity
//!
//! Both rules report symmetric differences in both directions, one
//! diagnostic per stray key.

use std::collections::BTreeSet;

use intentml_core::config::ValidationConfig;

use super::Rule;
use crate::validator::context::ValidationContext;
use crate::validator::report::{Diagnostic, DiagnosticKind};

/// Utterance keys and intent names must be identical sets
pub struct UtteranceIntentParity;

impl Rule for UtteranceIntentParity {
    fn name(&self) -> &'static str {
        "utterance-intent-parity"
    }

    fn check(&self, context: &ValidationContext, _config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let intent_names: BTreeSet<&str> =
            context.intents.iter().map(|i| i.name.as_str()).collect();
        let utterance_keys: BTreeSet<&str> =
            context.utterances.keys().map(String::as_str).collect();

        for key in utterance_keys.difference(&intent_names) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::UtterancesNotInSchema,
                format!("utterances exist for {key} but no such intent is declared"),
            ));
        }
        for name in intent_names.difference(&utterance_keys) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::IntentsWithoutUtterances,
                format!("intent {name} has no sample utterances"),
            ));
        }
        diagnostics
    }
}

/// Slot types referenced by custom intents and slot types in the model
/// must be identical sets; vendor types are outside the comparison
pub struct SlotParity;

impl Rule for SlotParity {
    fn name(&self) -> &'static str {
        "slot-parity"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let referenced: BTreeSet<&str> = context
            .custom_intents(&config.built_in_prefix)
            .iter()
            .flat_map(|intent| intent.slots.iter())
            .map(|slot| slot.slot_type.as_str())
            .filter(|slot_type| !slot_type.starts_with(&config.built_in_prefix))
            .collect();
        let declared: BTreeSet<&str> = context.slots.keys().map(String::as_str).collect();

        for slot_type in referenced.difference(&declared) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::SlotNotInSchema,
                format!("slot type {slot_type} is referenced but has no value sheet"),
            ));
        }
        for slot_type in declared.difference(&referenced) {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::SlotNotDeclaredOnIntent,
                format!("slot type {slot_type} has values but no intent declares it"),
            ));
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::context::IntentSchema;
    use intentml_core::SlotDefinition;

    #[test]
    fn test_parity_reports_both_directions_independently() {
        let config = ValidationConfig::default();
        let context = ValidationContext {
            utterances: [
                ("A".to_string(), vec!["a sample".to_string()]),
                ("B".to_string(), vec!["b sample".to_string()]),
            ]
            .into_iter()
            .collect(),
            intents: vec![
                IntentSchema {
                    name: "A".to_string(),
                    slots: vec![],
                },
                IntentSchema {
                    name: "C".to_string(),
                    slots: vec![],
                },
            ],
            ..ValidationContext::default()
        };

        let diagnostics = UtteranceIntentParity.check(&context, &config);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.iter().any(|d| {
            d.kind == DiagnosticKind::UtterancesNotInSchema && d.message.contains('B')
        }));
        assert!(diagnostics.iter().any(|d| {
            d.kind == DiagnosticKind::IntentsWithoutUtterances && d.message.contains('C')
        }));
    }

    #[test]
    fn test_slot_parity_ignores_vendor_types() {
        let config = ValidationConfig::default();
        let context = ValidationContext {
            intents: vec![IntentSchema {
                name: "TravelIntent".to_string(),
                slots: vec![
                    SlotDefinition {
                        name: "country".to_string(),
                        slot_type: "LIST_OF_COUNTRIES".to_string(),
                    },
                    SlotDefinition {
                        name: "count".to_string(),
                        slot_type: "AMAZON.NUMBER".to_string(),
                    },
                ],
            }],
            slots: [("LIST_OF_COUNTRIES".to_string(), vec!["usa".to_string()])]
                .into_iter()
                .collect(),
            ..ValidationContext::default()
        };
        assert!(SlotParity.check(&context, &config).is_empty());
    }

    #[test]
    fn test_slot_parity_both_directions() {
        let config = ValidationConfig::default();
        let context = ValidationContext {
            intents: vec![IntentSchema {
                name: "TravelIntent".to_string(),
                slots: vec![SlotDefinition {
                    name: "city".to_string(),
                    slot_type: "LIST_OF_CITIES".to_string(),
                }],
            }],
            slots: [("LIST_OF_COUNTRIES".to_string(), vec!["usa".to_string()])]
                .into_iter()
                .collect(),
            ..ValidationContext::default()
        };
        let diagnostics = SlotParity.check(&context, &config);
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::SlotNotInSchema));
        assert!(diagnostics
            .iter()
            .any(|d| d.kind == DiagnosticKind::SlotNotDeclaredOnIntent));
    }
}
