//! End-to-end compilation pipeline
//!
//! Classify and normalize raw sheets, build the model, run validation,
//! then fan every (locale, environment) invocation pair out across the
//! registered platform generators. Validation is advisory: diagnostics
//! ride along in the output and never block artifact emission.
//!
//! Compilation across tuples is embarrassingly parallel: every `build`
//! call reads the shared, read-only model and produces its own artifact
//! list, so the fan-out joins with no synchronization.

use convert_case::{Case, Casing};
use rayon::prelude::*;
use serde_json::json;
use tracing::{debug, info};

use intentml_core::{
    IntentMLConfig, IntentMLError, Locale, ModelDefinition, Result, SheetSource,
};

use crate::builder::IrBuilder;
use crate::generator::{Artifact, BuildContext, Generator, GeneratorRegistry};
use crate::sheet;
use crate::validator::{ValidationEngine, ValidationReport};

/// Everything one compilation run produces
#[derive(Debug)]
pub struct CompilationOutput {
    /// Artifacts for the external writer, paths mutually disjoint
    pub artifacts: Vec<Artifact>,
    /// Accumulated advisory diagnostics across validated locales
    pub report: ValidationReport,
}

/// Drives one compilation run over an immutable sheet snapshot
pub struct CompilerPipeline {
    config: IntentMLConfig,
    registry: GeneratorRegistry,
}

impl CompilerPipeline {
    /// Pipeline with the built-in platform generators
    #[must_use]
    pub fn new(config: IntentMLConfig) -> Self {
        Self {
            config,
            registry: GeneratorRegistry::with_defaults(),
        }
    }

    /// Pipeline with a caller-supplied generator registry
    #[must_use]
    pub fn with_registry(config: IntentMLConfig, registry: GeneratorRegistry) -> Self {
        Self { config, registry }
    }

    /// Build the model from raw sheets: classify, normalize, reduce
    #[must_use]
    pub fn build_model(&self, sources: Vec<SheetSource>) -> ModelDefinition {
        let total = sources.len();
        let sheets: Vec<_> = sources.into_iter().filter_map(sheet::ingest).collect();
        info!(total, classified = sheets.len(), "sheets ingested");
        IrBuilder::new(&sheets, &self.config.locales).build()
    }

    /// Run validation for every locale the model's invocations name,
    /// merging into one report. Models without invocations validate
    /// against the locales their intents were authored for.
    #[must_use]
    pub fn validate(&self, model: &ModelDefinition) -> ValidationReport {
        let engine = ValidationEngine::new(self.config.validation.clone());
        let mut locales: Vec<&Locale> = Vec::new();
        for invocation in &model.invocations {
            if !locales.contains(&&invocation.locale) {
                locales.push(&invocation.locale);
            }
        }
        if locales.is_empty() {
            for intent in &model.intents {
                if !locales.contains(&&intent.locale) {
                    locales.push(&intent.locale);
                }
            }
        }

        let mut report = ValidationReport::default();
        for locale in locales {
            report.merge(engine.validate_model(model, locale));
        }
        debug!(diagnostics = report.diagnostics.len(), "validation finished");
        report
    }

    /// Compile raw sheets into the full artifact set plus the validation
    /// report.
    ///
    /// # Errors
    ///
    /// Returns an error when a generator fails, e.g. an utterance template
    /// that cannot be expanded.
    pub fn compile(&self, sources: Vec<SheetSource>) -> Result<CompilationOutput> {
        let model = self.build_model(sources);
        let report = self.validate(&model);

        let pairs = model.invocation_pairs();
        let generators: Vec<&dyn Generator> = self.registry.iter().collect();
        let jobs: Vec<(&Locale, &str, &dyn Generator)> = pairs
            .iter()
            .flat_map(|(locale, environment)| {
                generators
                    .iter()
                    .map(move |generator| (*locale, *environment, *generator))
            })
            .collect();

        let results: Vec<_> = jobs
            .par_iter()
            .map(|(locale, environment, generator)| {
                generator
                    .build(&model, locale, environment, &self.config)
                    .map_err(|error| {
                        IntentMLError::model_element(
                            error.to_string(),
                            format!("{}/{environment}/{}", generator.namespace(), locale.tag()),
                        )
                    })
            })
            .collect();

        let mut artifacts = Vec::new();
        for result in results {
            artifacts.extend(result?);
        }
        artifacts.extend(self.shared_artifacts(&model));

        info!(
            artifacts = artifacts.len(),
            diagnostics = report.diagnostics.len(),
            "compilation finished"
        );
        Ok(CompilationOutput { artifacts, report })
    }

    /// Artifacts shared across platforms, emitted once per run: the
    /// localized view bundle, downloads, synonym maps, and newline-joined
    /// slot value text files
    fn shared_artifacts(&self, model: &ModelDefinition) -> Vec<Artifact> {
        let mut artifacts = Vec::new();

        if !model.views.is_empty() {
            artifacts.push(Artifact::json(
                "views/views.json",
                BuildContext::view_bundle(model),
            ));
        }
        artifacts.extend(BuildContext::download_artifacts(model));

        for slot in &model.slots {
            let kebab = slot.name.to_case(Case::Kebab);
            artifacts.push(Artifact::json(
                format!("synonyms/{}/{kebab}.json", slot.locale.tag()),
                json!(BuildContext::synonym_map(slot)),
            ));
            let values: Vec<&str> = slot
                .values
                .iter()
                .map(|value| value.value.as_str())
                .collect();
            artifacts.push(Artifact::text(
                format!("entities/{}/{kebab}.txt", slot.locale.tag()),
                values.join("\n"),
            ));
        }

        artifacts
    }
}
