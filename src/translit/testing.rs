//! Fluent assertions for tokenized words
//!
//!     Tests that walk the fragment list by hand break every time the fragment model
//!     changes, and they tend to check counts instead of content. The assertions here
//!     read a word the way a reader of the transliteration would: which fragment has
//!     which kind and which text, what the word status says.
//!
//!     ```rust,ignore
//!     use cuneiform_translit::translit::testing::assert_word;
//!
//!     let word = parse_word("°m.D°IŠKUR-šar-ru-um-ma", ParagraphLanguage::Hit);
//!     assert_word(&word)
//!         .is_ok()
//!         .fragment_count(3)
//!         .fragment(0, |f| f.kind(BreakdownType::Determinative).text("m.D"))
//!         .fragment(1, |f| f.kind(BreakdownType::Sumerogram).text("IŠKUR"))
//!         .fragment(2, |f| f.kind(BreakdownType::Basic).text("-šar-ru-um-ma"));
//!     ```

mod matchers;

pub use matchers::TextMatch;

use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::fragment::{Fragment, MarkerKind};
use crate::translit::language::ParagraphLanguage;
use crate::translit::slice::Position;
use crate::translit::status::{Status, StatusCode, StatusLevel};
use crate::translit::word::ParsedWord;

/// Start an assertion chain on a word.
pub fn assert_word(word: &ParsedWord) -> WordAssertion<'_> {
    WordAssertion {
        word,
        context: format!("word {:?}", describe(word)),
    }
}

fn describe(word: &ParsedWord) -> Vec<String> {
    word.fragments()
        .iter()
        .map(|fragment| fragment.raw_text().unwrap_or_default().to_string())
        .collect()
}

fn assert_level(status: &Status, expected: StatusLevel, context: &str) {
    assert_eq!(
        status.level(),
        expected,
        "{}: Expected status level {}, found {} ({:?})",
        context,
        expected,
        status.level(),
        status.events()
    );
}

fn assert_code(status: &Status, code: StatusCode, context: &str) {
    assert!(
        status.has_code(code),
        "{}: Expected a '{}' event, found {:?}",
        context,
        code,
        status.events()
    );
}

pub struct WordAssertion<'a> {
    word: &'a ParsedWord,
    context: String,
}

impl<'a> WordAssertion<'a> {
    pub fn fragment_count(self, expected: usize) -> Self {
        let actual = self.word.fragments().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} fragments, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn fragment<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(FragmentAssertion<'a>) -> FragmentAssertion<'a>,
    {
        let fragment = self.word.fragments().get(index).unwrap_or_else(|| {
            panic!(
                "{}: No fragment at index {} ({} fragments)",
                self.context,
                index,
                self.word.fragments().len()
            )
        });
        check(FragmentAssertion {
            fragment,
            context: format!("{}, fragment {}", self.context, index),
        });
        self
    }

    pub fn is_ok(self) -> Self {
        assert_level(self.word.status(), StatusLevel::Ok, &self.context);
        self
    }

    pub fn level(self, expected: StatusLevel) -> Self {
        assert_level(self.word.status(), expected, &self.context);
        self
    }

    pub fn has_code(self, code: StatusCode) -> Self {
        assert_code(self.word.status(), code, &self.context);
        self
    }

    pub fn language_change(self, expected: Option<ParagraphLanguage>) -> Self {
        assert_eq!(
            self.word.language_change(),
            expected,
            "{}: Unexpected language change",
            self.context
        );
        self
    }
}

pub struct FragmentAssertion<'a> {
    fragment: &'a Fragment,
    context: String,
}

impl<'a> FragmentAssertion<'a> {
    fn breakdown(&self) -> &'a Breakdown {
        self.fragment.as_breakdown().unwrap_or_else(|| {
            panic!(
                "{}: Expected a breakdown, found {:?}",
                self.context, self.fragment
            )
        })
    }

    pub fn kind(self, expected: BreakdownType) -> Self {
        assert_eq!(
            self.fragment.breakdown_type(),
            Some(expected),
            "{}: Unexpected fragment kind",
            self.context
        );
        self
    }

    /// Source text of a breakdown, rebuilt from its splits.
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.breakdown().text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string())
            .assert(&self.breakdown().text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.breakdown().text(), &self.context);
        self
    }

    pub fn raw_text(self, expected: &str) -> Self {
        let actual = self.fragment.raw_text().unwrap_or_default();
        TextMatch::Exact(expected.to_string()).assert(actual, &self.context);
        self
    }

    pub fn split_count(self, expected: usize) -> Self {
        let actual = self.breakdown().splits().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} splits, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn member_count(self, expected: usize) -> Self {
        let actual = self.breakdown().members().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} collection members, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn member(self, index: usize, kind: BreakdownType, text: &str) -> Self {
        let member = self.breakdown().members().get(index).unwrap_or_else(|| {
            panic!("{}: No collection member at index {}", self.context, index)
        });
        let context = format!("{}, member {}", self.context, index);
        assert_eq!(member.kind(), kind, "{}: Unexpected member kind", context);
        TextMatch::Exact(text.to_string()).assert(&member.text(), &context);
        self
    }

    pub fn position(self, expected: Position) -> Self {
        assert_eq!(
            self.breakdown().position(),
            expected,
            "{}: Unexpected erasure position",
            self.context
        );
        self
    }

    pub fn is_gap(self) -> Self {
        assert!(
            matches!(self.fragment, Fragment::Gap(_)),
            "{}: Expected a gap, found {:?}",
            self.context,
            self.fragment
        );
        self
    }

    pub fn is_ligature(self) -> Self {
        assert!(
            matches!(self.fragment, Fragment::Ligature(_)),
            "{}: Expected a ligature, found {:?}",
            self.context,
            self.fragment
        );
        self
    }

    pub fn is_marker(self, kind: MarkerKind, content: &str) -> Self {
        match self.fragment {
            Fragment::Marker(marker) => {
                assert_eq!(marker.kind, kind, "{}: Unexpected marker kind", self.context);
                TextMatch::Exact(content.to_string()).assert(&marker.content, &self.context);
            }
            other => panic!("{}: Expected a marker, found {:?}", self.context, other),
        }
        self
    }

    pub fn is_fraction(self, numerator: u32, denominator: u32) -> Self {
        match self.fragment {
            Fragment::FractionNumber(fraction) => assert_eq!(
                (fraction.numerator, fraction.denominator),
                (numerator, denominator),
                "{}: Unexpected fraction",
                self.context
            ),
            other => panic!("{}: Expected a fraction, found {:?}", self.context, other),
        }
        self
    }

    pub fn level(self, expected: StatusLevel) -> Self {
        assert_level(self.fragment.status(), expected, &self.context);
        self
    }

    pub fn has_code(self, code: StatusCode) -> Self {
        assert_code(self.fragment.status(), code, &self.context);
        self
    }
}
