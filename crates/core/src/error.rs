//! Error types for Tessera.

use thiserror::Error;

/// Result type alias for Tessera operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Tessera operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A query is missing a part its verb requires.
    #[error("Malformed query: {message}")]
    MalformedQuery { message: String },

    /// A query references a table that is not available to it.
    #[error("Unknown table reference: {name}")]
    UnknownTable { name: String },

    /// A verb string did not match any alias.
    #[error("Invalid verb: {verb}")]
    UnknownVerb { verb: String },

    /// A predicate operator is unknown or cannot be used in this context.
    #[error("Invalid operator: {operator}")]
    InvalidOperator { operator: String },

    /// Database configuration is inconsistent.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a malformed query error.
    pub fn malformed_query(message: impl Into<String>) -> Self {
        Error::MalformedQuery {
            message: message.into(),
        }
    }

    /// Creates an unknown table error.
    pub fn unknown_table(name: impl Into<String>) -> Self {
        Error::UnknownTable { name: name.into() }
    }

    /// Creates an unknown verb error.
    pub fn unknown_verb(verb: impl Into<String>) -> Self {
        Error::UnknownVerb { verb: verb.into() }
    }

    /// Creates an invalid operator error.
    pub fn invalid_operator(operator: impl Into<String>) -> Self {
        Error::InvalidOperator {
            operator: operator.into(),
        }
    }

    /// Creates an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig {
            message: message.into(),
        }
    }
}
