//! # cuneiform-translit
//!
//! Tokenizer and classifier for hand-typed cuneiform transliterations.
//!
//! ## Testing
//!
//! Word-level tests use the fluent assertions in the
//! [testing module](translit::testing).

pub mod translit;
