//! Error types for configuration loading and output.
//!
//! Nothing in the interactive core can fail: missing fields render a
//! placeholder, out-of-range pages clamp, and incomparable values stay in
//! place when sorting. Errors only come from reading configuration and writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a [`TableConfig`](crate::TableConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The range label template does not compile.
    #[error("invalid range template: {0}")]
    Template(#[from] minijinja::Error),

    #[error("unsupported configuration file extension: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedExtension(Option<String>),

    /// A value parsed but is out of range.
    #[error("invalid configuration: {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },
}

/// Errors from serializing a rendered table.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Output was not valid UTF-8.
    #[error("output encoding failed: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
