//! Error types for the upsert engine.

use std::path::PathBuf;

use rowkeep_model::{NormalizationError, SchemaError, ValidationErrors};
use rowkeep_store::StoreError;
use thiserror::Error;

/// Everything a submission or listing can fail with.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Header row unusable. Ends the session.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Key value could not be normalized. User-correctable.
    #[error("invalid key in column '{column}': {source}")]
    Key {
        column: String,
        #[source]
        source: NormalizationError,
    },

    /// One or more field values do not fit their column roles. User-correctable.
    #[error("invalid field values: {0}")]
    Validation(ValidationErrors),

    /// The store rejected a read or write. Aborts the submission.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    /// True for errors to render next to a form field rather than abort on.
    pub fn is_field_error(&self) -> bool {
        matches!(self, EngineError::Key { .. } | EngineError::Validation(_))
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Configuration file could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid schema settings in {path}: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },
}
