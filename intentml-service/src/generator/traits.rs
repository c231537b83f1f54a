//! Generator trait and artifact types
//!
//! A generator lowers the model into a list of `{path, content}` artifacts
//! for one (locale, environment) pair. No generator touches a filesystem;
//! serialization to disk belongs to the external writer.

use intentml_core::{IntentMLConfig, Locale, ModelDefinition};
use serde_json::Value;
use thiserror::Error;

use crate::template::TemplateError;

/// Artifact payload: formatted JSON, or newline-joined plain text for
/// slot-value and synonym text artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactContent {
    /// JSON document, serialized by the writer
    Json(Value),
    /// Plain text, written verbatim
    Text(String),
}

/// One compiled artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Relative, generator-namespaced, locale/environment-scoped path
    pub path: String,
    /// Payload
    pub content: ArtifactContent,
}

impl Artifact {
    /// Create a JSON artifact
    #[must_use]
    pub fn json(path: impl Into<String>, content: Value) -> Self {
        Self {
            path: path.into(),
            content: ArtifactContent::Json(content),
        }
    }

    /// Create a plain-text artifact
    #[must_use]
    pub fn text(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: ArtifactContent::Text(content.into()),
        }
    }
}

/// Errors produced while lowering the model into artifacts
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No invocation name declared for the requested pair
    #[error("no invocation name for locale {locale} in environment {environment}")]
    MissingInvocation {
        /// Requested locale
        locale: String,
        /// Requested environment
        environment: String,
    },

    /// An utterance template failed to expand
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Serialization failures
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for generator operations
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Trait for all platform generators
pub trait Generator: Send + Sync {
    /// Platform namespace, e.g. `alexa`; used for path prefixes and for
    /// filtering platform-scoped intents and publishing rows
    fn namespace(&self) -> &'static str;

    /// Lower the model into artifacts for one (locale, environment) pair.
    ///
    /// Stateless across calls; results for different pairs accumulate at
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError` when the pair has no invocation name or a
    /// template fails to expand.
    fn build(
        &self,
        model: &ModelDefinition,
        locale: &Locale,
        environment: &str,
        config: &IntentMLConfig,
    ) -> GeneratorResult<Vec<Artifact>>;
}
