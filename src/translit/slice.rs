//! Slices: the smallest typed pieces of a split
//!
//! A split's text is scanned into readable content and the single-character
//! delimiters sitting between it. Delimiters become [Metadata] slices that remember
//! which bracket pair they belong to and whether they open or close it.

use crate::translit::escape::{display, unescape};
use logos::Logos;
use serde::Serialize;

/// Where a delimiter sits relative to the span it encloses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    #[default]
    Initial,
    End,
    Unknown,
}

impl Position {
    /// Erasure markers have no open/close shape; each one flips the state.
    pub fn toggle(self) -> Position {
        match self {
            Position::Initial => Position::End,
            Position::End => Position::Initial,
            Position::Unknown => Position::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataKind {
    /// `[` `]`: destroyed, restored by the editor
    Deletum,
    /// `⸢` `⸣`: damaged but legible
    Laedi,
    /// `*`: erased by the scribe
    Deleri,
    /// `〈` `〉`: omitted by the scribe, added by the editor
    Add,
    Undefined,
}

impl MetadataKind {
    pub fn of(symbol: char) -> MetadataKind {
        match symbol {
            '[' | ']' => MetadataKind::Deletum,
            '⸢' | '⸣' => MetadataKind::Laedi,
            '*' => MetadataKind::Deleri,
            '〈' | '〉' => MetadataKind::Add,
            _ => MetadataKind::Undefined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub symbol: char,
    pub kind: MetadataKind,
    pub position: Position,
}

impl Metadata {
    /// Brackets know their position from their shape. Erasure markers start out
    /// `Unknown` until the split is threaded.
    pub fn new(symbol: char) -> Self {
        let kind = MetadataKind::of(symbol);
        let position = match symbol {
            '[' | '⸢' | '〈' => Position::Initial,
            ']' | '⸣' | '〉' => Position::End,
            _ => Position::Unknown,
        };
        Self {
            symbol,
            kind,
            position,
        }
    }

    pub fn is_erasure(&self) -> bool {
        self.kind == MetadataKind::Deleri
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Slice {
    Content(String),
    Metadata(Metadata),
    /// Escaped evaluation glyphs
    TextEvaluation(String),
    /// Text wrapped in `〈〈 … 〉〉`: written by the scribe but superfluous
    Surplus(String),
}

impl Slice {
    pub fn is_text_evaluation(&self) -> bool {
        matches!(self, Slice::TextEvaluation(_))
    }

    pub fn as_content(&self) -> Option<&str> {
        match self {
            Slice::Content(text) => Some(text),
            _ => None,
        }
    }

    /// The slice as it was typed.
    pub fn source_text(&self) -> String {
        match self {
            Slice::Content(text) | Slice::TextEvaluation(text) => unescape(text),
            Slice::Metadata(metadata) => metadata.symbol.to_string(),
            Slice::Surplus(text) => format!("〈〈{}〉〉", unescape(text)),
        }
    }

    /// Readable text only, without delimiters or evaluations.
    pub fn plain_text(&self) -> String {
        match self {
            Slice::Content(text) | Slice::Surplus(text) => display(text),
            Slice::Metadata(_) | Slice::TextEvaluation(_) => String::new(),
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SliceToken {
    #[token("[")]
    #[token("]")]
    #[token("⸢")]
    #[token("⸣")]
    #[token("〈")]
    #[token("〉")]
    #[token("*")]
    Delimiter,

    #[regex(r"[^\[\]⸢⸣〈〉*]+")]
    Text,
}

/// Split text into delimiter characters and the runs between them.
pub(crate) fn scan(text: &str) -> Vec<(SliceToken, &str)> {
    let mut lexer = SliceToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next() {
        // Every character is covered by one of the two token shapes.
        let token = token.unwrap_or(SliceToken::Text);
        tokens.push((token, lexer.slice()));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_delimiters_between_text() {
        let tokens = scan("[ša]-⸢at*");
        assert_eq!(
            tokens,
            vec![
                (SliceToken::Delimiter, "["),
                (SliceToken::Text, "ša"),
                (SliceToken::Delimiter, "]"),
                (SliceToken::Text, "-"),
                (SliceToken::Delimiter, "⸢"),
                (SliceToken::Text, "at"),
                (SliceToken::Delimiter, "*"),
            ]
        );
    }

    #[test]
    fn metadata_position_from_bracket_shape() {
        assert_eq!(Metadata::new('[').position, Position::Initial);
        assert_eq!(Metadata::new('⸣').position, Position::End);
        assert_eq!(Metadata::new('*').position, Position::Unknown);
        assert!(Metadata::new('*').is_erasure());
        assert_eq!(Metadata::new('〉').kind, MetadataKind::Add);
    }

    #[test]
    fn unknown_symbols_are_undefined() {
        assert_eq!(MetadataKind::of('#'), MetadataKind::Undefined);
    }

    #[test]
    fn toggle_flips_known_positions() {
        assert_eq!(Position::Initial.toggle(), Position::End);
        assert_eq!(Position::End.toggle(), Position::Initial);
        assert_eq!(Position::Unknown.toggle(), Position::Unknown);
    }

    #[test]
    fn surplus_source_text() {
        assert_eq!(Slice::Surplus("ta".into()).source_text(), "〈〈ta〉〉");
        assert_eq!(Slice::Surplus("ta".into()).plain_text(), "ta");
    }
}
