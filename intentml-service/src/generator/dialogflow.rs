//! Dialogflow generator
//!
//! Emits one intent-definition file and one usersays sample file per
//! intent, one entity-definition and one entity-entries file per custom
//! slot, a package descriptor, and an agent descriptor merged from
//! publishing rows plus derived start/end intent ids.
//!
//! Artifact ids are content-addressed: a hash of the artifact's own
//! canonicalized JSON, stable across runs for identical content. Built-in
//! intent names lose their vendor namespace prefix on emission, and
//! `LaunchIntent` carries the platform welcome events.

use convert_case::{Case, Casing};
use serde_json::{json, Map, Value};

use intentml_core::{Intent, IntentMLConfig, Locale, ModelDefinition, Slot};

use super::canonical::content_id;
use super::context::BuildContext;
use super::traits::{Artifact, Generator, GeneratorError, GeneratorResult};

/// Events attached to the welcome intent
const WELCOME_EVENTS: &[&str] = &["WELCOME", "GOOGLE_ASSISTANT_WELCOME"];

/// Name of the intent that greets the user
const LAUNCH_INTENT: &str = "LaunchIntent";

/// Dialogflow agent generator
#[derive(Default)]
pub struct DialogflowGenerator;

impl DialogflowGenerator {
    /// Create a new Dialogflow generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Dialogflow-side intent name: the vendor prefix is dropped
    fn emission_name(intent: &Intent, vendor_prefix: &str) -> String {
        intent
            .name
            .strip_prefix(vendor_prefix)
            .unwrap_or(&intent.name)
            .to_string()
    }

    /// Dialogflow entity reference (`@meta`) for a slot type
    fn entity_meta(slot_type: &str, config: &IntentMLConfig) -> String {
        if slot_type == config.generation.number_slot_type {
            "@sys.number".to_string()
        } else if slot_type.starts_with(&config.validation.built_in_prefix) {
            "@sys.any".to_string()
        } else {
            format!("@{}", slot_type.to_case(Case::Kebab))
        }
    }

    /// Intent definition with its content-addressed id prepended
    fn intent_document(intent: &Intent, name: &str, config: &IntentMLConfig) -> Value {
        let parameters: Vec<Value> = intent
            .slots
            .iter()
            .map(|slot| {
                json!({
                    "dataType": Self::entity_meta(&slot.slot_type, config),
                    "name": slot.name,
                    "value": format!("${}", slot.name),
                    "isList": false,
                })
            })
            .collect();

        let mut events: Vec<String> = intent.events.clone();
        if name == LAUNCH_INTENT {
            for event in WELCOME_EVENTS {
                if !events.iter().any(|existing| existing == event) {
                    events.push((*event).to_string());
                }
            }
        }

        let document = json!({
            "name": name,
            "auto": true,
            "contexts": [],
            "responses": [{
                "resetContexts": false,
                "action": name,
                "affectedContexts": [],
                "parameters": parameters,
                "messages": [],
                "defaultResponsePlatforms": {},
                "speech": [],
            }],
            "priority": 500_000,
            "webhookUsed": true,
            "webhookForSlotFilling": false,
            "fallbackIntent": false,
            "events": events,
        });
        with_content_id(document)
    }

    /// One usersays entry per sample, each with its own content id
    fn usersays_document(
        intent: &Intent,
        context: &BuildContext<'_>,
        config: &IntentMLConfig,
    ) -> GeneratorResult<Value> {
        let slots = context.slots();
        let entries: Result<Vec<Value>, GeneratorError> = intent
            .samples
            .iter()
            .map(|sample| {
                let segments = crate::template::parse(sample)?;
                let data: Vec<Value> = segments
                    .iter()
                    .map(|segment| match segment {
                        crate::template::Segment::Literal(text) => {
                            json!({ "text": text, "userDefined": false })
                        }
                        crate::template::Segment::Variable(variable) => {
                            let binding = intent.slots.iter().find(|s| &s.name == variable);
                            let slot_type = binding.map_or("", |b| b.slot_type.as_str());
                            let sample_text = if slot_type == config.generation.number_slot_type {
                                config.generation.number_placeholder.clone()
                            } else {
                                slots
                                    .get(slot_type)
                                    .and_then(|slot| slot.values.first())
                                    .map_or_else(|| variable.clone(), |v| v.value.clone())
                            };
                            json!({
                                "text": sample_text,
                                "alias": variable,
                                "meta": Self::entity_meta(slot_type, config),
                                "userDefined": true,
                            })
                        }
                    })
                    .collect();
                Ok(with_content_id(json!({
                    "data": data,
                    "isTemplate": false,
                    "count": 0,
                })))
            })
            .collect();
        Ok(Value::Array(entries?))
    }

    fn entity_document(slot: &Slot) -> Value {
        with_content_id(json!({
            "name": slot.name.to_case(Case::Kebab),
            "isOverridable": true,
            "isEnum": false,
            "automatedExpansion": false,
        }))
    }

    fn entries_document(slot: &Slot) -> Value {
        let entries: Vec<Value> = slot
            .values
            .iter()
            .map(|value| {
                let mut synonyms = vec![value.value.clone()];
                synonyms.extend(value.synonyms.iter().cloned());
                json!({ "value": value.value, "synonyms": synonyms })
            })
            .collect();
        Value::Array(entries)
    }

    /// Agent descriptor: publishing merge plus language and derived
    /// start/end intent ids
    fn agent_document(
        context: &BuildContext<'_>,
        intent_ids: &[(String, &Intent)],
        language: &str,
    ) -> Value {
        let mut agent = context.manifest();
        if !agent.is_object() {
            agent = Value::Object(Map::new());
        }
        agent["language"] = json!(language);

        let start_intents: Vec<&str> = intent_ids
            .iter()
            .filter(|(_, intent)| intent.start_intent)
            .map(|(id, _)| id.as_str())
            .collect();
        let end_intent_ids: Vec<&str> = intent_ids
            .iter()
            .filter(|(_, intent)| intent.end_intent)
            .map(|(id, _)| id.as_str())
            .collect();

        if !agent["googleAssistant"].is_object() {
            agent["googleAssistant"] = Value::Object(Map::new());
        }
        agent["googleAssistant"]["startIntents"] = json!(start_intents);
        agent["googleAssistant"]["endIntentIds"] = json!(end_intent_ids);
        agent
    }
}

/// Prepend a content-addressed id computed over the document itself
fn with_content_id(document: Value) -> Value {
    let id = content_id(&document);
    let mut with_id = Map::new();
    with_id.insert("id".to_string(), json!(id));
    if let Value::Object(fields) = document {
        with_id.extend(fields);
    }
    Value::Object(with_id)
}

impl Generator for DialogflowGenerator {
    fn namespace(&self) -> &'static str {
        "dialogflow"
    }

    fn build(
        &self,
        model: &ModelDefinition,
        locale: &Locale,
        environment: &str,
        config: &IntentMLConfig,
    ) -> GeneratorResult<Vec<Artifact>> {
        let context = BuildContext::new(model, locale, environment, self.namespace());
        let language = locale.language().to_string();
        let vendor_prefix = &config.validation.built_in_prefix;

        let mut artifacts = Vec::new();
        let mut intent_ids: Vec<(String, &Intent)> = Vec::new();

        for intent in context.intents() {
            let name = Self::emission_name(intent, vendor_prefix);
            let document = Self::intent_document(intent, &name, config);
            let id = document["id"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            intent_ids.push((id, intent));
            artifacts.push(Artifact::json(
                format!("dialogflow/{environment}/intents/{name}.json"),
                document,
            ));

            if !intent.samples.is_empty() {
                artifacts.push(Artifact::json(
                    format!("dialogflow/{environment}/intents/{name}_usersays_{language}.json"),
                    Self::usersays_document(intent, &context, config)?,
                ));
            }
        }

        for slot in context.slots().values() {
            let entity_name = slot.name.to_case(Case::Kebab);
            artifacts.push(Artifact::json(
                format!("dialogflow/{environment}/entities/{entity_name}.json"),
                Self::entity_document(slot),
            ));
            artifacts.push(Artifact::json(
                format!("dialogflow/{environment}/entities/{entity_name}_entries_{language}.json"),
                Self::entries_document(slot),
            ));
        }

        artifacts.push(Artifact::json(
            format!("dialogflow/{environment}/package.json"),
            json!({ "version": "1.0.0" }),
        ));
        artifacts.push(Artifact::json(
            format!("dialogflow/{environment}/agent.json"),
            Self::agent_document(&context, &intent_ids, &language),
        ));

        Ok(artifacts)
    }
}
