//! Sample-level rules: minimum counts, duplicates, connecting words

use indexmap::IndexMap;
use intentml_core::config::ValidationConfig;

use super::Rule;
use crate::validator::context::ValidationContext;
use crate::validator::report::{Diagnostic, DiagnosticKind};

/// Every vendor intent needs at least the configured minimum of samples,
/// unless its name carries the exemption suffix
pub struct MinimumSamples;

impl Rule for MinimumSamples {
    fn name(&self) -> &'static str {
        "minimum-samples"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        context
            .intents
            .iter()
            .filter(|intent| intent.name.starts_with(&config.built_in_prefix))
            .filter(|intent| !intent.name.ends_with(&config.min_samples_exempt_suffix))
            .filter_map(|intent| {
                let count = context
                    .utterances
                    .get(&intent.name)
                    .map_or(0, Vec::len);
                if count < config.min_built_in_samples {
                    Some(Diagnostic::new(
                        DiagnosticKind::MinimumUtterancesNotMet,
                        format!(
                            "{} has {count} sample(s), minimum is {}",
                            intent.name, config.min_built_in_samples
                        ),
                    ))
                } else {
                    None
                }
            })
            .collect()
    }
}

/// No two different intents may share an identical utterance
pub struct DuplicateSamples;

impl Rule for DuplicateSamples {
    fn name(&self) -> &'static str {
        "duplicate-samples"
    }

    fn check(&self, context: &ValidationContext, _config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut owners: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for (intent, samples) in &context.utterances {
            for sample in samples {
                let entry = owners.entry(sample.as_str()).or_default();
                if !entry.contains(&intent.as_str()) {
                    entry.push(intent.as_str());
                }
            }
        }
        owners
            .into_iter()
            .filter(|(_, intents)| intents.len() > 1)
            .map(|(sample, intents)| {
                Diagnostic::new(
                    DiagnosticKind::DuplicateUtteranceAcrossIntents,
                    format!("\"{sample}\" appears under {}", intents.join(" and ")),
                )
            })
            .collect()
    }
}

/// No utterance may begin with a connecting word
pub struct ConnectingWords;

impl Rule for ConnectingWords {
    fn name(&self) -> &'static str {
        "connecting-words"
    }

    fn check(&self, context: &ValidationContext, config: &ValidationConfig) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for (intent, samples) in &context.utterances {
            for sample in samples {
                let lowered = sample.to_lowercase();
                if let Some(word) = config
                    .connecting_words
                    .iter()
                    .find(|word| lowered.starts_with(word.as_str()))
                {
                    diagnostics.push(Diagnostic::new(
                        DiagnosticKind::LeadingConnectingWord,
                        format!(
                            "utterance \"{sample}\" for {intent} starts with connecting word \"{}\"",
                            word.trim_end()
                        ),
                    ));
                }
            }
        }
        diagnostics
    }
}
