//! Validation context
//!
//! The engine runs against a flattened view of the model for one locale:
//! utterances keyed by intent name, the intent schemas, and the custom
//! slot value sets. The view is owned so engine tests can construct
//! divergent utterance/intent sets directly.

use indexmap::IndexMap;
use intentml_core::{Locale, ModelDefinition, SlotDefinition};

/// One intent as the validation rules see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentSchema {
    /// Intent name
    pub name: String,
    /// Declared slots
    pub slots: Vec<SlotDefinition>,
}

/// Flattened per-locale view of the model
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    /// Sample utterances keyed by intent name; intents without samples
    /// have no key here
    pub utterances: IndexMap<String, Vec<String>>,
    /// Intent schemas in model order
    pub intents: Vec<IntentSchema>,
    /// Custom slot values keyed by slot type name
    pub slots: IndexMap<String, Vec<String>>,
}

impl ValidationContext {
    /// Build the view for `locale` from the model.
    ///
    /// Intents limited to platforms other than `alexa` are excluded; the
    /// engine checks the Alexa-style view of the model.
    #[must_use]
    pub fn from_model(model: &ModelDefinition, locale: &Locale) -> Self {
        let mut utterances = IndexMap::new();
        let mut intents = Vec::new();
        for intent in model
            .intents
            .iter()
            .filter(|i| &i.locale == locale)
            .filter(|i| i.platforms.is_empty() || i.platforms.contains("alexa"))
        {
            if !intent.samples.is_empty() {
                utterances.insert(intent.name.clone(), intent.samples.clone());
            }
            intents.push(IntentSchema {
                name: intent.name.clone(),
                slots: intent.slots.clone(),
            });
        }

        let slots = model
            .slots_for(locale)
            .into_iter()
            .map(|slot| {
                let mut values: Vec<String> = Vec::new();
                for slot_value in &slot.values {
                    values.push(slot_value.value.clone());
                    values.extend(slot_value.synonyms.iter().cloned());
                }
                (slot.name.clone(), values)
            })
            .collect();

        Self {
            utterances,
            intents,
            slots,
        }
    }

    /// Intent names outside the vendor namespace
    #[must_use]
    pub fn custom_intents<'a>(&'a self, built_in_prefix: &str) -> Vec<&'a IntentSchema> {
        self.intents
            .iter()
            .filter(|intent| !intent.name.starts_with(built_in_prefix))
            .collect()
    }

    /// Look up one intent schema by name
    #[must_use]
    pub fn intent(&self, name: &str) -> Option<&IntentSchema> {
        self.intents.iter().find(|intent| intent.name == name)
    }
}
