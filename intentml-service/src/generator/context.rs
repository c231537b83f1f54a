//! Shared build context
//!
//! Every platform generator works through a [`BuildContext`]: a borrowed,
//! read-only view of the model for one (locale, environment, namespace)
//! combination, plus the emitters shared between platforms (synonym maps,
//! the localized view bundle, download artifacts, the manifest merge).

use convert_case::{Case, Casing};
use indexmap::IndexMap;
use serde_json::{Map, Value};

use intentml_core::{Intent, Locale, ModelDefinition, Slot};

use super::traits::Artifact;

/// Read-only compiler context for one (locale, environment, namespace)
pub struct BuildContext<'a> {
    /// The full model
    pub model: &'a ModelDefinition,
    /// Target locale
    pub locale: &'a Locale,
    /// Target environment
    pub environment: &'a str,
    /// Platform namespace of the owning generator
    pub namespace: &'a str,
}

impl<'a> BuildContext<'a> {
    /// Create a context over the model
    #[must_use]
    pub fn new(
        model: &'a ModelDefinition,
        locale: &'a Locale,
        environment: &'a str,
        namespace: &'a str,
    ) -> Self {
        Self {
            model,
            locale,
            environment,
            namespace,
        }
    }

    /// Intents matching the locale whose platform set is empty or includes
    /// this namespace and whose environment set is empty or includes the
    /// target environment
    #[must_use]
    pub fn intents(&self) -> Vec<&'a Intent> {
        self.model
            .intents
            .iter()
            .filter(|intent| &intent.locale == self.locale)
            .filter(|intent| {
                intent.platforms.is_empty() || intent.platforms.contains(self.namespace)
            })
            .filter(|intent| {
                intent.environments.is_empty() || intent.environments.contains(self.environment)
            })
            .collect()
    }

    /// Custom slot types for the locale, keyed by name
    #[must_use]
    pub fn slots(&self) -> IndexMap<String, &'a Slot> {
        self.model
            .slots_for(self.locale)
            .into_iter()
            .map(|slot| (slot.name.clone(), slot))
            .collect()
    }

    /// The invocation name declared for this (locale, environment) pair
    #[must_use]
    pub fn invocation_name(&self) -> Option<&'a str> {
        self.model.invocation_name(self.locale, self.environment)
    }

    /// Synonym map for one slot: synonym → canonical for every synonym;
    /// a value with no synonyms maps to itself
    #[must_use]
    pub fn synonym_map(slot: &Slot) -> IndexMap<String, String> {
        let mut map = IndexMap::new();
        for slot_value in &slot.values {
            if slot_value.synonyms.is_empty() {
                map.insert(slot_value.value.clone(), slot_value.value.clone());
            } else {
                for synonym in &slot_value.synonyms {
                    map.insert(synonym.clone(), slot_value.value.clone());
                }
            }
        }
        map
    }

    /// The merged localized view bundle: one object nested by locale tag
    #[must_use]
    pub fn view_bundle(model: &ModelDefinition) -> Value {
        let mut bundle = Map::new();
        for view in &model.views {
            let entry = bundle
                .entry(view.locale.tag().to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            merge_objects(entry, &view.data);
        }
        Value::Object(bundle)
    }

    /// One artifact per download, keyed by locale and kebab-cased name
    #[must_use]
    pub fn download_artifacts(model: &ModelDefinition) -> Vec<Artifact> {
        model
            .downloads
            .iter()
            .map(|download| {
                Artifact::json(
                    format!(
                        "content/{}/{}.json",
                        download.locale.tag(),
                        download.name.to_case(Case::Kebab)
                    ),
                    Value::Array(download.data.clone()),
                )
            })
            .collect()
    }

    /// Manifest merge: fold publishing rows whose environment set is empty
    /// or includes the target environment and whose key prefix matches
    /// this namespace into a nested object. Array-marker segments (`[]`)
    /// append at their path; keys containing `keywords` split their value
    /// on commas.
    #[must_use]
    pub fn manifest(&self) -> Value {
        let mut manifest = Value::Object(Map::new());
        let prefix = format!("{}.", self.namespace);
        for row in &self.model.publishing {
            if !(row.environments.is_empty() || row.environments.contains(self.environment)) {
                continue;
            }
            let Some(path) = row.key.strip_prefix(&prefix) else {
                continue;
            };
            let value = if row.key.contains("keywords") {
                split_keywords(&row.value)
            } else {
                row.value.clone()
            };
            assign_publishing_path(&mut manifest, path, value);
        }
        manifest
    }
}

/// Deep-merge `incoming` object content into `target`
fn merge_objects(target: &mut Value, incoming: &Value) {
    let (Value::Object(target_map), Value::Object(incoming_map)) = (&mut *target, incoming) else {
        *target = incoming.clone();
        return;
    };
    for (key, value) in incoming_map {
        match target_map.get_mut(key) {
            Some(existing) => merge_objects(existing, value),
            None => {
                target_map.insert(key.clone(), value.clone());
            }
        }
    }
}

fn split_keywords(value: &Value) -> Value {
    match value.as_str() {
        Some(text) => Value::Array(
            text.split(',')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(|entry| Value::String(entry.to_string()))
                .collect(),
        ),
        None => value.clone(),
    }
}

/// Assign `value` at the dotted `path` inside `root`, honoring `[]`
/// array markers: a leaf marker pushes the value onto the array; a
/// mid-path marker appends a fresh object unless the last element can
/// still take the remaining path.
fn assign_publishing_path(root: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
    let mut current = root;

    for (index, segment) in segments.iter().enumerate() {
        let is_leaf = index + 1 == segments.len();
        let (name, is_array) = match segment.strip_suffix("[]") {
            Some(name) => (name, true),
            None => (*segment, false),
        };

        let Value::Object(map) = current else { return };
        if is_array {
            let entry = map
                .entry(name.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            let Value::Array(items) = entry else { return };
            if is_leaf {
                items.push(value);
                return;
            }
            let next_key = segments[index + 1].trim_end_matches("[]");
            let reuse_last = matches!(
                items.last(),
                Some(Value::Object(last)) if !last.contains_key(next_key)
            );
            if !reuse_last {
                items.push(Value::Object(Map::new()));
            }
            let Some(last) = items.last_mut() else { return };
            current = last;
        } else if is_leaf {
            map.insert(name.to_string(), value);
            return;
        } else {
            current = map
                .entry(name.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }
}
