//! Character classes and patterns shared by every classifier
//!
//!     Transliterations mix several scripts in one word: upper case for logograms,
//!     lower case for phonetic syllables, digits for numerals and subscript digits for
//!     sign indices. On top of that come the damage and erasure delimiters and the
//!     private-use glyphs the escapers in [escape](super::escape) produce.
//!
//!     All alphabets are defined once here as plain strings. The regular expressions
//!     are derived from them and compiled lazily, the same way the block grammar keeps
//!     its line patterns in statics.

use crate::translit::escape::{
    ELLIPSIS, ESCAPED_LETTER_FIRST, ESCAPED_LETTER_LAST, LITERAL_EQUALS, LITERAL_HYPHEN,
    TEXT_EVALUATION_GLYPHS,
};
use once_cell::sync::Lazy;
use regex::Regex;

pub const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZÁÀÂÉÈÊÍÌÎÚÙÛŠḪṢṬĜḤŘ";
pub const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzáàâéèêíìîúùûšḫṣṭĝḥř";
pub const DIGITS: &str = "0123456789";
pub const INDEX_DIGITS: &str = "₀₁₂₃₄₅₆₇₈₉ₓ";

/// Damage, lesion, addition and erasure delimiters.
pub const DELIMITERS: &str = "[]⸢⸣〈〉*";
/// Brackets that mark physical damage; these wrap glosses.
pub const DAMAGE_BRACKETS: &str = "[]⸢⸣";

pub const ERASURE_MARKER: char = '*';
pub const SUBSCRIPT_MARKER: char = '|';
pub const DEGREE_SIGN: char = '°';
pub const LIGATURE_GLYPH: char = '‿';
pub const INSCRIBED_MARKER: char = '×';
pub const AKKADOGRAM_MARKER: char = '_';

pub fn is_upper(ch: char) -> bool {
    UPPER_LETTERS.contains(ch)
}

pub fn is_lower(ch: char) -> bool {
    LOWER_LETTERS.contains(ch)
}

pub fn is_letter(ch: char) -> bool {
    is_upper(ch) || is_lower(ch)
}

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(ch)
}

pub fn is_damage_bracket(ch: char) -> bool {
    DAMAGE_BRACKETS.contains(ch)
}

pub fn is_opening_bracket(ch: char) -> bool {
    matches!(ch, '[' | '⸢' | '〈')
}

pub fn is_text_evaluation(ch: char) -> bool {
    TEXT_EVALUATION_GLYPHS.contains(&ch)
}

/// Map an ASCII digit to its subscript form.
pub fn index_digit(ch: char) -> Option<char> {
    match ch {
        '0'..='9' => INDEX_DIGITS.chars().nth(ch as usize - '0' as usize),
        'x' => Some('ₓ'),
        _ => None,
    }
}

/// Drop every delimiter character from `text`.
pub fn strip_delimiters(text: &str) -> String {
    text.chars().filter(|ch| !is_delimiter(*ch)).collect()
}

/// Regex-escape each character so the set can sit inside a `[...]` class.
fn class(chars: &str) -> String {
    chars
        .chars()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
        .collect()
}

fn evaluation_class() -> String {
    TEXT_EVALUATION_GLYPHS
        .iter()
        .map(|ch| regex::escape(ch.encode_utf8(&mut [0; 4])))
        .collect()
}

fn escaped_letter_range() -> String {
    format!(
        r"\x{{{:X}}}-\x{{{:X}}}",
        ESCAPED_LETTER_FIRST as u32, ESCAPED_LETTER_LAST as u32
    )
}

fn literal_separators() -> String {
    class(&format!("{LITERAL_HYPHEN}{LITERAL_EQUALS}"))
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

/// `°content°`
pub static DEGREE_SIGN_SEGMENT: Lazy<Regex> = Lazy::new(|| compile(r"°([^°]*)°"));

/// `{S:…}`, `{G:…}`, `{F:…}`, `{K:…}`, `{M:…}`, `{/M:…}`
pub static MARKER_TAG: Lazy<Regex> = Lazy::new(|| compile(r"\{(S|G|F|K|M|/M):([^}]*)\}"));

pub static LIGATURE_RUN: Lazy<Regex> =
    Lazy::new(|| compile(&format!("[ {}]+", class(&LIGATURE_GLYPH.to_string()))));

pub static GAP: Lazy<Regex> = Lazy::new(|| compile(r"^¬{3,}$"));

pub static FRACTION: Lazy<Regex> = Lazy::new(|| compile(r"^(\d+)/(\d+)$"));

/// Only evaluation glyphs and delimiters, with an optional subscript.
pub static PURE_TEXT_EVALUATION: Lazy<Regex> = Lazy::new(|| {
    let e = evaluation_class();
    let d = class(DELIMITERS);
    compile(&format!(r"^[{e}{d}]*[{e}][{e}{d}]*(?:\|.*)?$"))
});

pub static DELIMITER_ONLY: Lazy<Regex> =
    Lazy::new(|| compile(&format!("^[{}]+$", class(DELIMITERS))));

/// Digits and delimiters with at least one digit, or delimiters around the
/// unknown-number marker `n`; both with trailing evaluations and a subscript.
pub static NUMBER: Lazy<Regex> = Lazy::new(|| {
    let d = class(DELIMITERS);
    let e = evaluation_class();
    compile(&format!(
        r"^(?:[{d}]*[0-9][0-9{d}]*|[{d}]*n[{d}]*)[{e}]*(?:\|[^|]*)?$"
    ))
});

fn sumerogram_alphabet() -> String {
    format!(
        "{}{}{}{}\\.\\+'x{}{}{}{}\\|",
        UPPER_LETTERS,
        DIGITS,
        INDEX_DIGITS,
        class(DELIMITERS),
        INSCRIBED_MARKER,
        evaluation_class(),
        literal_separators(),
        escaped_letter_range(),
    )
}

pub static SUMEROGRAM: Lazy<Regex> = Lazy::new(|| {
    let a = sumerogram_alphabet();
    compile(&format!("^[{a}]*[{UPPER_LETTERS}][{a}]*$"))
});

pub static AKKADOGRAM: Lazy<Regex> = Lazy::new(|| {
    let a = sumerogram_alphabet();
    compile(&format!("^_[{a}]*[{UPPER_LETTERS}][{a}]*$"))
});

pub static BASIC: Lazy<Regex> = Lazy::new(|| {
    let p = escaped_letter_range();
    let a = format!(
        "{}{}{}{}\\+{}{}{}{}\\|",
        LOWER_LETTERS,
        DIGITS,
        INDEX_DIGITS,
        class(DELIMITERS),
        p,
        ELLIPSIS,
        evaluation_class(),
        literal_separators(),
    );
    compile(&format!("^[{a}]*[{LOWER_LETTERS}{ELLIPSIS}{p}][{a}]*$"))
});

pub static DETERMINATIVE_CONTENT: Lazy<Regex> = Lazy::new(|| {
    let a = format!(
        "{}{}{}{}\\.",
        UPPER_LETTERS,
        DIGITS,
        INDEX_DIGITS,
        class(DELIMITERS)
    );
    compile(&format!("^[{a}]*[{UPPER_LETTERS}{DIGITS}][{a}]*$"))
});

pub static GLOSSING_CONTENT: Lazy<Regex> = Lazy::new(|| {
    let a = format!(
        "{}{}{}{}\\.{}",
        LOWER_LETTERS,
        DIGITS,
        INDEX_DIGITS,
        class(DELIMITERS),
        evaluation_class(),
    );
    compile(&format!("^[{a}]*[{LOWER_LETTERS}][{a}]*$"))
});

/// Inscribed sign written with a latin `x` between two upper-case letters (`KAxU`).
pub static INSCRIBED_X: Lazy<Regex> =
    Lazy::new(|| compile(&format!("([{UPPER_LETTERS}])x([{UPPER_LETTERS}])")));
