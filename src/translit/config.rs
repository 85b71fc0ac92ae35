//! Domain data loader for the word tokenizer.
//!
//! `defaults/translit.default.toml` is embedded into the library so the god-name and
//! preposition tables ship with every build. Applications layer their own files on top
//! of those defaults via [`Loader`] before deserializing into [`TranslitConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/translit.default.toml");

static DEFAULTS: Lazy<TranslitConfig> =
    Lazy::new(|| Loader::new().build().expect("embedded defaults deserialize"));

/// Top-level configuration consumed by the tokenizer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslitConfig {
    pub gods: GodConfig,
    pub akkadian: AkkadianConfig,
}

/// Determinatives and numerals that together spell a deity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GodConfig {
    pub names: Vec<String>,
    pub numbers: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AkkadianConfig {
    pub prepositions: Vec<String>,
}

impl TranslitConfig {
    /// The embedded defaults, deserialized once.
    pub fn defaults() -> &'static TranslitConfig {
        &DEFAULTS
    }

    pub fn is_god_name(&self, text: &str) -> bool {
        self.gods.names.iter().any(|name| name == text)
    }

    pub fn is_god_number(&self, number: u32) -> bool {
        self.gods.numbers.contains(&number)
    }

    pub fn is_preposition(&self, text: &str) -> bool {
        self.akkadian.prepositions.iter().any(|prep| prep == text)
    }
}

/// Builds a [`TranslitConfig`] from the embedded tables plus whatever the caller
/// layers on top.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file over the embedded tables. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Replace the numerals that spell a deity after a god determinative.
    pub fn with_god_numbers(self, numbers: &[u32]) -> Result<Self, ConfigError> {
        let numbers: Vec<i64> = numbers.iter().map(|&n| i64::from(n)).collect();
        self.set_override("gods.numbers", numbers)
    }

    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TranslitConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}
