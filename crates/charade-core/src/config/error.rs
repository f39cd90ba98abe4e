//! Error types for fixture loading.

use crate::storage::StorageError;
use thiserror::Error;

/// Fixture parsing/loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Unknown file type
    #[error("unknown fixture file type: {0}")]
    UnknownFileType(String),
    /// Fixture file could not be read
    #[error("failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid glob pattern
    #[error("invalid fixture pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// A fixture record failed storage validation
    #[error("invalid record in collection `{collection}`: {source}")]
    Record {
        collection: String,
        source: StorageError,
    },
}
