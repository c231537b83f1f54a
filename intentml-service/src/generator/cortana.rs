//! Cortana generator
//!
//! Emits a single combined LUIS-style schema per (locale, environment):
//! intents, entities, and the fully Cartesian-expanded, entity-span-tagged
//! sample set. The generic number slot type is substituted with a fixed
//! placeholder and never carries a span.

use serde_json::{json, Value};
use std::collections::BTreeSet;

use intentml_core::{IntentMLConfig, Locale, ModelDefinition};

use super::context::BuildContext;
use super::expander;
use super::traits::{Artifact, Generator, GeneratorError, GeneratorResult};

/// Cortana/LUIS schema generator
#[derive(Default)]
pub struct CortanaGenerator;

impl CortanaGenerator {
    /// Create a new Cortana generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Generator for CortanaGenerator {
    fn namespace(&self) -> &'static str {
        "cortana"
    }

    fn build(
        &self,
        model: &ModelDefinition,
        locale: &Locale,
        environment: &str,
        config: &IntentMLConfig,
    ) -> GeneratorResult<Vec<Artifact>> {
        let context = BuildContext::new(model, locale, environment, self.namespace());
        let invocation =
            context
                .invocation_name()
                .ok_or_else(|| GeneratorError::MissingInvocation {
                    locale: locale.tag().to_string(),
                    environment: environment.to_string(),
                })?;

        let intents = context.intents();
        let slots = context.slots();

        let mut entities: BTreeSet<&str> = BTreeSet::new();
        let mut utterances: Vec<Value> = Vec::new();

        for intent in &intents {
            for slot in &intent.slots {
                if slots.contains_key(&slot.slot_type) {
                    entities.insert(slot.slot_type.as_str());
                }
            }
            for sample in &intent.samples {
                let expanded =
                    expander::expand(sample, &intent.slots, &slots, &config.generation)?;
                for member in expanded {
                    utterances.push(json!({
                        "text": member.text,
                        "intent": intent.name,
                        "entities": member
                            .entities
                            .iter()
                            .map(|span| {
                                json!({
                                    "entity": span.entity,
                                    "startPos": span.start_pos,
                                    "endPos": span.end_pos,
                                })
                            })
                            .collect::<Vec<_>>(),
                    }));
                }
            }
        }

        let document = json!({
            "luis_schema_version": "2.1.0",
            "name": invocation,
            "desc": "",
            "culture": locale.tag().to_lowercase(),
            "intents": intents
                .iter()
                .map(|intent| json!({ "name": intent.name }))
                .collect::<Vec<_>>(),
            "entities": entities
                .iter()
                .map(|entity| json!({ "name": entity }))
                .collect::<Vec<_>>(),
            "utterances": utterances,
        });

        Ok(vec![Artifact::json(
            format!("cortana/{environment}/{}.json", locale.tag()),
            document,
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ArtifactContent;
    use intentml_core::{Intent, Invocation, LocaleTable, Slot, SlotDefinition, SlotValue};
    use pretty_assertions::assert_eq;

    fn model() -> (ModelDefinition, Locale) {
        let table = LocaleTable::default();
        let locale = table.fallback();
        let model = ModelDefinition {
            intents: vec![Intent {
                name: "TravelIntent".to_string(),
                samples: vec!["go to {country} with {count} bags".to_string()],
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
                can_fulfill_intent: false,
                start_intent: false,
                end_intent: false,
                sign_in_required: false,
                events: vec![],
                environments: std::collections::BTreeSet::new(),
                platforms: std::collections::BTreeSet::new(),
                locale: locale.clone(),
            }],
            slots: vec![Slot {
                locale: locale.clone(),
                name: "LIST_OF_COUNTRIES".to_string(),
                values: vec![
                    SlotValue {
                        value: "usa".to_string(),
                        synonyms: vec![],
                    },
                    SlotValue {
                        value: "france".to_string(),
                        synonyms: vec![],
                    },
                ],
            }],
            invocations: vec![Invocation {
                locale: locale.clone(),
                environment: "production".to_string(),
                name: "world traveler".to_string(),
            }],
            ..ModelDefinition::default()
        };
        (model, locale)
    }

    #[test]
    fn test_combined_schema_with_expanded_utterances() {
        let (model, locale) = model();
        let artifacts = CortanaGenerator::new()
            .build(&model, &locale, "production", &IntentMLConfig::default())
            .expect("builds");
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, "cortana/production/en-US.json");

        let ArtifactContent::Json(doc) = &artifacts[0].content else {
            panic!("expected JSON content");
        };
        assert_eq!(doc["culture"], "en-us");
        assert_eq!(doc["name"], "world traveler");
        assert_eq!(doc["intents"], serde_json::json!([{ "name": "TravelIntent" }]));
        // Only the custom entity is listed; the number type is built in.
        assert_eq!(
            doc["entities"],
            serde_json::json!([{ "name": "LIST_OF_COUNTRIES" }])
        );

        let utterances = doc["utterances"].as_array().expect("utterances");
        // Two countries, number collapses to one placeholder.
        assert_eq!(utterances.len(), 2);
        assert_eq!(utterances[0]["text"], "go to usa with 1 bags");
        let spans = utterances[0]["entities"].as_array().expect("spans");
        // The number placeholder carries no span.
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0]["entity"], "LIST_OF_COUNTRIES");
        assert_eq!(spans[0]["startPos"], 6);
        assert_eq!(spans[0]["endPos"], 9);
    }
}
