//! Presence rules: collections exist, required intents are declared

use intentml_core::config::ValidationConfig;

use super::Rule;
use crate::validator::context::ValidationContext;
use crate::validator::report::{Diagnostic, DiagnosticKind};

/// The utterance collection must be present and non-empty
pub struct UtterancesPresent;

impl Rule for UtterancesPresent {
    fn name(&self) -> &'static str {
        "utterances-present"
    }

    fn check(&self, context: &ValidationContext, _config: &ValidationConfig) -> Vec<Diagnostic> {
        if context.utterances.is_empty() {
            vec![Diagnostic::new(
                DiagnosticKind::MissingUtterances,
                "no sample utterances found in any sheet",
            )]
        } else {
            Vec::new()
        }
    }
}

/// The intent collection must be present and non-empty
pub struct IntentSchemaPresent;

impl Rule for IntentSchemaPresent {
    fn name(&self) -> &'static str {
        "intent-schema-present"
    }

    fn check(&self, context: &ValidationContext, _config: &ValidationConfig) -> Vec<Diagnostic> {
        if context.intents.is_empty() {
            vec![Diagnostic::new(
                DiagnosticKind::MissingIntentSchema,
                "no intents found in any sheet",
            )]
        } else {
            Vec::new()
        }
    }
}

/// At least one custom (non-vendor-namespaced) intent must exist
pub struct CustomIntentPresent;

impl Rule for CustomIntentPresent {
    fn name(&self) -> &'static str {
        "custom-intent-present"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        if context.intents.is_empty() {
            // MissingIntentSchema already covers the empty case.
            return Vec::new();
        }
        if context.custom_intents(&config.built_in_prefix).is_empty() {
            vec![Diagnostic::new(
                DiagnosticKind::RequiredIntentMissing,
                format!(
                    "at least one intent outside the {} namespace is required",
                    config.built_in_prefix.trim_end_matches('.')
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

/// The mandatory vendor intents must be present by exact name
pub struct RequiredBuiltIns;

impl Rule for RequiredBuiltIns {
    fn name(&self) -> &'static str {
        "required-built-in-intents"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        config
            .required_built_in_intents
            .iter()
            .filter(|required| context.intent(required).is_none())
            .map(|required| {
                Diagnostic::new(
                    DiagnosticKind::MissingBuiltinIntent,
                    format!("built-in intent {required} must be declared"),
                )
            })
            .collect()
    }
}
