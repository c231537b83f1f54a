//! Validation rules
//!
//! Each rule is independently checkable and appends diagnostics to its
//! result instead of failing fast; the engine runs them all and
//! accumulates. Rules never throw.

pub mod characters;
pub mod coverage;
pub mod presence;
pub mod samples;
pub mod templates;
pub mod volume;

pub use characters::CharacterSet;
pub use coverage::{SlotParity, UtteranceIntentParity};
pub use presence::{CustomIntentPresent, IntentSchemaPresent, RequiredBuiltIns, UtterancesPresent};
pub use samples::{ConnectingWords, DuplicateSamples, MinimumSamples};
pub use templates::{DuplicateSlotReference, TemplateCompile};
pub use volume::VolumeCeilings;

use intentml_core::config::ValidationConfig;

use super::context::ValidationContext;
use super::report::Diagnostic;

/// Trait for all validation rules
pub trait Rule: Send + Sync {
    /// Name of the rule, for logging
    fn name(&self) -> &'static str;

    /// Check the context, returning any diagnostics
    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic>;
}

/// The full rule set, in report order
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(UtterancesPresent),
        Box::new(IntentSchemaPresent),
        Box::new(CustomIntentPresent),
        Box::new(RequiredBuiltIns),
        Box::new(MinimumSamples),
        Box::new(CharacterSet),
        Box::new(UtteranceIntentParity),
        Box::new(SlotParity),
        Box::new(TemplateCompile),
        Box::new(DuplicateSlotReference),
        Box::new(DuplicateSamples),
        Box::new(ConnectingWords),
        Box::new(VolumeCeilings),
    ]
}
