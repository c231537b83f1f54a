//! Configuration types for the compiler

use serde::{Deserialize, Serialize};

use crate::locale::LocaleTable;

/// Main configuration for a compilation run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentMLConfig {
    /// Recognized locales, in preference order
    pub locales: LocaleTable,

    /// Validation configuration
    pub validation: ValidationConfig,

    /// Artifact generation configuration
    pub generation: GenerationConfig,
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Vendor namespace marking built-in intents and slot types
    pub built_in_prefix: String,

    /// Built-in intents that must be present by exact name
    pub required_built_in_intents: Vec<String>,

    /// Minimum sample utterances per built-in intent
    pub min_built_in_samples: usize,

    /// Intent-name suffix exempting an intent from the minimum-sample rule
    pub min_samples_exempt_suffix: String,

    /// Words an utterance must not begin with
    pub connecting_words: Vec<String>,

    /// Ceiling on the total character volume across all utterances
    pub max_utterance_characters: usize,

    /// Ceiling on the total custom slot value count
    pub max_slot_values: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            built_in_prefix: "AMAZON.".to_string(),
            required_built_in_intents: vec![
                "AMAZON.HelpIntent".to_string(),
                "AMAZON.CancelIntent".to_string(),
                "AMAZON.StopIntent".to_string(),
            ],
            min_built_in_samples: 5,
            min_samples_exempt_suffix: "OnlyIntent".to_string(),
            connecting_words: vec![
                "and ".to_string(),
                "with ".to_string(),
                "but ".to_string(),
                "that's ".to_string(),
                "or ".to_string(),
            ],
            max_utterance_characters: 200_000,
            max_slot_values: 50_000,
        }
    }
}

/// Artifact generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Slot type substituted with a fixed digit instead of enumerated values
    pub number_slot_type: String,

    /// Placeholder substituted for the number slot type during expansion
    pub number_placeholder: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            number_slot_type: "AMAZON.NUMBER".to_string(),
            number_placeholder: "1".to_string(),
        }
    }
}
