//! Error types for `intentml` operations

use thiserror::Error;

/// Main error type for `intentml` operations
#[derive(Error, Debug)]
pub enum IntentMLError {
    /// Sheet parsing errors
    #[error("Failed to parse sheet: {message}")]
    ParseError {
        /// Error message
        message: String,
        /// Sheet the error occurred in, if known
        sheet: Option<String>,
    },

    /// Locale tag not present in the fixed locale table
    #[error("Invalid locale '{locale}', expected one of: {available}")]
    InvalidLocale {
        /// Rejected locale tag
        locale: String,
        /// Comma-joined list of accepted tags
        available: String,
    },

    /// Model construction errors
    #[error("Model construction failed: {message}")]
    ModelError {
        /// Error message
        message: String,
        /// Model element that failed
        element: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Generic errors with context
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for `intentml` operations
pub type Result<T> = std::result::Result<T, IntentMLError>;

impl IntentMLError {
    /// Create a new parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            sheet: None,
        }
    }

    /// Create a parse error scoped to one sheet
    #[must_use]
    pub fn parse_in(message: impl Into<String>, sheet: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
            sheet: Some(sheet.into()),
        }
    }

    /// Create a model construction error
    #[must_use]
    pub fn model(message: impl Into<String>) -> Self {
        Self::ModelError {
            message: message.into(),
            element: None,
        }
    }

    /// Create a model construction error scoped to one element
    #[must_use]
    pub fn model_element(message: impl Into<String>, element: impl Into<String>) -> Self {
        Self::ModelError {
            message: message.into(),
            element: Some(element.into()),
        }
    }

    /// Create a generic error from a message
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for IntentMLError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
