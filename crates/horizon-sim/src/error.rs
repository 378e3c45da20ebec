//! Error types for startup loading and progress persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Model loading failures. Fatal to startup, never retried.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("model '{0}' not found")]
    NotFound(String),

    #[error("model '{name}' has invalid half extents {extents:?}")]
    InvalidExtents { name: String, extents: [f64; 3] },

    #[error("failed to read asset manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed asset manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Progress store failures. Logged and skipped during play.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access progress file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed progress file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("progress file is not a JSON object")]
    NotAnObject,

    #[error("stored value for '{key}' is not a level: {value}")]
    InvalidValue { key: String, value: String },
}

/// Tuning config failures. Fatal to startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid tuning value '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}
