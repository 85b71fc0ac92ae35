//! Main module for the transliteration tokenizer
//!
//!     Layers, leaves first:
//!
//!         status      severity-graded diagnostics
//!         alphabet    character classes and the patterns derived from them
//!         escape      word normalization and the reversible escapers
//!         slice       content, delimiter, evaluation and surplus slices
//!         split       one separator-delimited piece, decomposed into slices
//!         breakdown   typed runs of splits, and collections of them
//!         fragment    everything a word can be tokenized into
//!         word        the tokenizer and its post-passes
//!         export      markup rendering

pub mod alphabet;
pub mod breakdown;
pub mod config;
pub mod error;
pub mod escape;
pub mod export;
pub mod fragment;
pub mod language;
pub mod slice;
pub mod split;
pub mod status;
pub mod testing;
pub mod word;

pub use breakdown::{Breakdown, BreakdownType};
pub use config::{Loader, TranslitConfig};
pub use error::{TranslitError, TranslitResult};
pub use fragment::Fragment;
pub use language::ParagraphLanguage;
pub use status::{Status, StatusCode, StatusEvent, StatusLevel};
pub use word::{parse_word, parse_words, ParsedWord, WordParser};
