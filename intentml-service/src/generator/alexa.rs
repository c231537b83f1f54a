//! Alexa generator
//!
//! Emits one interaction-model document per (locale, environment), a
//! manifest document merged from publishing rows, and the list of intents
//! flagged for can-fulfill resolution. Slot types enumerate every
//! distinct canonical value; synonyms stay out of the interaction model
//! and are emitted through the shared synonym-map artifacts instead.

use serde_json::{json, Value};

use intentml_core::{IntentMLConfig, Locale, ModelDefinition};

use super::context::BuildContext;
use super::traits::{Artifact, Generator, GeneratorError, GeneratorResult};

/// Alexa interaction-model generator
#[derive(Default)]
pub struct AlexaGenerator;

impl AlexaGenerator {
    /// Create a new Alexa generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn interaction_model(context: &BuildContext<'_>, invocation: &str) -> Value {
        let intents: Vec<Value> = context
            .intents()
            .iter()
            .map(|intent| {
                json!({
                    "name": intent.name,
                    "samples": intent.samples,
                    "slots": intent
                        .slots
                        .iter()
                        .map(|slot| json!({ "name": slot.name, "type": slot.slot_type }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        let types: Vec<Value> = context
            .slots()
            .values()
            .map(|slot| {
                json!({
                    "name": slot.name,
                    "values": slot
                        .values
                        .iter()
                        .map(|value| json!({ "name": { "value": value.value } }))
                        .collect::<Vec<_>>(),
                })
            })
            .collect();

        json!({
            "interactionModel": {
                "languageModel": {
                    "invocationName": invocation,
                    "intents": intents,
                    "types": types,
                },
            },
        })
    }
}

impl Generator for AlexaGenerator {
    fn namespace(&self) -> &'static str {
        "alexa"
    }

    fn build(
        &self,
        model: &ModelDefinition,
        locale: &Locale,
        environment: &str,
        _config: &IntentMLConfig,
    ) -> GeneratorResult<Vec<Artifact>> {
        let context = BuildContext::new(model, locale, environment, self.namespace());
        let invocation =
            context
                .invocation_name()
                .ok_or_else(|| GeneratorError::MissingInvocation {
                    locale: locale.tag().to_string(),
                    environment: environment.to_string(),
                })?;

        let mut artifacts = vec![
            Artifact::json(
                format!("alexa/{environment}/interaction-model/{}.json", locale.tag()),
                Self::interaction_model(&context, invocation),
            ),
            Artifact::json(
                format!("alexa/{environment}/manifest.json"),
                json!({ "manifest": context.manifest() }),
            ),
        ];

        let can_fulfill: Vec<&str> = context
            .intents()
            .iter()
            .filter(|intent| intent.can_fulfill_intent)
            .map(|intent| intent.name.as_str())
            .collect();
        if !can_fulfill.is_empty() {
            artifacts.push(Artifact::json(
                format!("alexa/{environment}/can-fulfill-intents.json"),
                json!(can_fulfill),
            ));
        }

        Ok(artifacts)
    }
}
