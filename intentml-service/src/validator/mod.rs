//! Rule-based validation over the intermediate representation
//!
//! The engine cross-checks the model for internal consistency before
//! compilation: presence of required collections and intents, sample
//! minimums and character sets, utterance/intent and slot parity,
//! template compilation, duplicates and volume ceilings.
//!
//! Every violated rule appends one diagnostic to the accumulated report
//! and validation continues; nothing here throws and nothing halts
//! compilation. The report is advisory.

pub mod context;
pub mod report;
pub mod rules;

pub use context::{IntentSchema, ValidationContext};
pub use report::{Diagnostic, DiagnosticKind, ValidationReport};
pub use rules::Rule;

use intentml_core::config::ValidationConfig;
use intentml_core::{Locale, ModelDefinition};
use tracing::debug;

/// Runs the full rule set over a validation context
pub struct ValidationEngine {
    config: ValidationConfig,
    rules: Vec<Box<dyn Rule>>,
}

impl ValidationEngine {
    /// Create an engine with the default rule set
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            rules: rules::default_rules(),
        }
    }

    /// Create an engine with a caller-supplied rule set
    #[must_use]
    pub fn with_rules(config: ValidationConfig, rules: Vec<Box<dyn Rule>>) -> Self {
        Self { config, rules }
    }

    /// Run every rule, accumulating diagnostics in rule order
    #[must_use]
    pub fn validate(&self, context: &ValidationContext) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            let diagnostics = rule.check(context, &self.config);
            if !diagnostics.is_empty() {
                debug!(rule = rule.name(), count = diagnostics.len(), "rule fired");
            }
            report.diagnostics.extend(diagnostics);
        }
        report
    }

    /// Validate the model's view for one locale
    #[must_use]
    pub fn validate_model(&self, model: &ModelDefinition, locale: &Locale) -> ValidationReport {
        self.validate(&ValidationContext::from_model(model, locale))
    }
}
