//! Word tokenizer
//!
//!     One typed word goes in, an ordered list of fragments and a word-level status come
//!     out. The word is handled in stages, each one carving typed fragments out of the
//!     literal text the previous stage left behind:
//!
//!         1. Shortcuts: `@xyz` switches the paragraph language, `¬¬¬` marks a gap and a
//!            word made only of evaluations becomes a single syllabic run.
//!         2. Marker tags `{S:…}`, `{G:…}`, `{F:…}`, `{K:…}`, `{M:…}` and `{/M:…}`,
//!            cut out verbatim. The text between them is normalized.
//!         3. Degree-sign spans: determinatives, glosses and undefined spans.
//!         4. Ligatures (spaces and `‿`).
//!         5. Run classification of everything that is left.
//!
//!     The fragment list is then cleaned up by the passes in [passes]: god names absorb
//!     their numerals, evaluations move off glosses, collections are formed and the
//!     erasure state is threaded through every split.
//!
//!     The tokenizer never fails. Problems end up in the [Status] of the fragment they
//!     concern, and the word status carries the complete trail.

pub mod classify;
pub mod degree_sign;
pub mod ligature;
pub mod passes;
pub mod tags;

use crate::translit::alphabet::{GAP, PURE_TEXT_EVALUATION};
use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::config::TranslitConfig;
use crate::translit::escape::normalize;
use crate::translit::fragment::{Fragment, Gap, LanguageChange};
use crate::translit::language::ParagraphLanguage;
use crate::translit::slice::Position;
use crate::translit::status::{Status, StatusCode, StatusLevel};
use serde::Serialize;

/// Intermediate result of the extraction stages: either a finished fragment or
/// literal text still waiting for the next stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Piece {
    Text(String),
    Fragment(Fragment),
}

impl Piece {
    /// Run `stage` over every text piece, keeping finished fragments in place.
    fn expand(pieces: Vec<Piece>, mut stage: impl FnMut(&str) -> Vec<Piece>) -> Vec<Piece> {
        let mut out = Vec::with_capacity(pieces.len());
        for piece in pieces {
            match piece {
                Piece::Text(text) if text.is_empty() => {}
                Piece::Text(text) => out.extend(stage(&text)),
                fragment => out.push(fragment),
            }
        }
        out
    }
}

/// Tokenized form of one word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedWord {
    fragments: Vec<Fragment>,
    status: Status,
    language: ParagraphLanguage,
    language_change: Option<ParagraphLanguage>,
}

impl ParsedWord {
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Paragraph language the word was parsed in.
    pub fn language(&self) -> ParagraphLanguage {
        self.language
    }

    /// Language switched to by the preceding `@` word, as set by the caller.
    pub fn language_change(&self) -> Option<ParagraphLanguage> {
        self.language_change
    }

    pub fn set_language_change(&mut self, language: Option<ParagraphLanguage>) {
        self.language_change = language;
    }

    /// Language this word itself switches to, if it is an `@` word.
    pub fn introduced_language(&self) -> Option<ParagraphLanguage> {
        match self.fragments.first() {
            Some(Fragment::LanguageChange(change)) => change.language,
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Tokenizer bound to one configuration.
#[derive(Debug, Clone, Copy)]
pub struct WordParser<'a> {
    config: &'a TranslitConfig,
}

impl Default for WordParser<'static> {
    fn default() -> Self {
        WordParser::new(TranslitConfig::defaults())
    }
}

impl<'a> WordParser<'a> {
    pub fn new(config: &'a TranslitConfig) -> Self {
        WordParser { config }
    }

    pub fn config(&self) -> &'a TranslitConfig {
        self.config
    }

    pub fn parse(&self, text: &str, language: ParagraphLanguage) -> ParsedWord {
        let mut status = Status::new();
        let trimmed = text.trim();
        if trimmed.len() != text.len() {
            status.add(
                StatusLevel::Info,
                StatusCode::Trim,
                format!("removed whitespace around '{trimmed}'"),
            );
        }

        let mut fragments = self.tokenize(trimmed, &mut status);
        passes::run(&mut fragments, self.config, &mut status);

        tracing::debug!(
            "Parsed word '{}' into {} fragments ({})",
            trimmed,
            fragments.len(),
            status.level()
        );

        ParsedWord {
            fragments,
            status,
            language,
            language_change: None,
        }
    }

    fn tokenize(&self, text: &str, status: &mut Status) -> Vec<Fragment> {
        if text.is_empty() {
            status.add(StatusLevel::Minor, StatusCode::Empty, "empty word");
            return Vec::new();
        }

        if let Some(code) = text.strip_prefix('@') {
            return vec![language_change(text, code)];
        }

        let normalized = normalize(text);

        if GAP.is_match(&normalized) {
            return vec![Fragment::Gap(Gap {
                raw_text: text.to_string(),
                status: Status::new(),
            })];
        }

        if PURE_TEXT_EVALUATION.is_match(&normalized) {
            return Breakdown::build(BreakdownType::Basic, &normalized, true)
                .into_iter()
                .map(Fragment::from)
                .collect();
        }

        let pieces = Piece::expand(tags::extract(text), |text| {
            vec![Piece::Text(normalize(text))]
        });
        let pieces = Piece::expand(pieces, |text| degree_sign::extract(text, self.config));
        let pieces = Piece::expand(pieces, ligature::extract);

        let mut fragments = Vec::new();
        for piece in pieces {
            match piece {
                Piece::Fragment(fragment) => fragments.push(fragment),
                Piece::Text(text) => fragments.extend(classify::classify(&text, self.config)),
            }
        }
        fragments
    }
}

fn language_change(text: &str, code: &str) -> Fragment {
    let mut status = Status::new();
    let language = match code.parse::<ParagraphLanguage>() {
        Ok(language) => Some(language),
        Err(err) => {
            status.add(StatusLevel::Moderate, StatusCode::Unknown, err.to_string());
            None
        }
    };
    Fragment::LanguageChange(LanguageChange {
        raw_text: text.to_string(),
        language,
        status,
    })
}

/// Parse one word with the embedded default configuration.
pub fn parse_word(text: &str, language: ParagraphLanguage) -> ParsedWord {
    WordParser::default().parse(text, language)
}

/// Parse a sequence of words, carrying `@` language switches forward.
///
/// Each `@` word stays in the output; the word after it gets the new language as
/// its `language_change` and is parsed in that language, as are all later words.
pub fn parse_words<'w>(
    parser: &WordParser<'_>,
    words: impl IntoIterator<Item = &'w str>,
    language: ParagraphLanguage,
) -> Vec<ParsedWord> {
    let mut current = language;
    let mut pending = None;
    let mut parsed = Vec::new();
    for word in words {
        let mut result = parser.parse(word, current);
        result.set_language_change(pending.take());
        if let Some(next) = result.introduced_language() {
            current = next;
            pending = Some(next);
        }
        parsed.push(result);
    }
    parsed
}

/// Final erasure position of a fragment list, for callers threading across words.
pub fn final_position(fragments: &[Fragment]) -> Position {
    fragments
        .iter()
        .rev()
        .find_map(Fragment::as_breakdown)
        .map_or(Position::Initial, Breakdown::position)
}
