// src/error.rs

//! Error types for listing ingestion

use thiserror::Error;

/// Errors raised while decomposing identifiers, building records or
/// parsing listings
#[derive(Error, Debug)]
pub enum Error {
    /// Artifact identifier lacks the `name-version-release.arch` structure
    #[error("Malformed artifact identifier '{identifier}': {reason}")]
    MalformedIdentifier { identifier: String, reason: String },

    /// Combined name+version token has no separator
    #[error("Cannot split '{0}' into name and version")]
    AmbiguousSplit(String),

    /// Extra field set twice for one record
    #[error("Extra field '{0}' is already set for this record")]
    DuplicateKey(String),

    /// Name and version set both separately and from a combined token
    #[error("Name and version set through both '{0}' and 'set_name_and_version'")]
    ConflictingSetters(&'static str),

    /// Record finalized before its required fields were set
    #[error("Record is missing required field '{0}'")]
    IncompleteRecord(&'static str),

    /// Unregistered listing format name
    #[error("Unknown listing format: {0}")]
    UnknownFormat(String),

    /// Transformer rule that cannot be applied
    #[error("Invalid transformer rule: {0}")]
    InvalidRule(String),

    /// Ingestion configuration that cannot be used as is
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// CSS selector rejected by the HTML parser
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    pub(crate) fn malformed(identifier: &str, reason: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            identifier: identifier.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, Error>;
