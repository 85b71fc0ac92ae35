//! Error types for the fallible edges of the crate
//!
//! Tokenizing a word never fails; problems found in the text end up in a
//! [Status](crate::translit::status::Status). Loading configuration, reading
//! input and serializing output can fail, and those failures are reported here.

use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslitError {
    /// The configuration sources could not be read or deserialized
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize to JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to serialize to YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown paragraph language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown output format '{0}'")]
    UnknownFormat(String),
}

pub type TranslitResult<T> = Result<T, TranslitError>;
