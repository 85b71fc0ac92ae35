//! Word normalization and the reversible escapers
//!
//!     Before a word is classified, a handful of typing conventions are folded into
//!     canonical forms (fraction glyphs, angle brackets, ellipses, god-name
//!     determinatives). After that, two escapers replace multi-character annotations
//!     with single private-use glyphs so that the classifiers can treat them as one
//!     character each:
//!
//!         - [escape_content]: parenthesized single letters such as `(a)` or `(n)`, and
//!           the special forms `(.)`, `(-)` and `(=)`.
//!         - [escape_text_evaluations]: the editorial evaluations `!`, `?`, `(?)` and
//!           `sic`, each with an optional leading dot.
//!
//!     Both have exact inverses ([unescape_content], [unescape_text_evaluations]),
//!     and [unescape] undoes everything the tokenizer escapes, including the literal
//!     separator glyphs produced for doubled `--` and `==`.

use crate::translit::alphabet::is_letter;
use once_cell::sync::Lazy;
use regex::Regex;

/// First glyph of the escaped-letter block (Supplementary Private Use Area-A).
pub const ESCAPED_LETTER_FIRST: char = '\u{F0000}';
/// Last glyph of the escaped-letter block.
pub const ESCAPED_LETTER_LAST: char = '\u{FFFFD}';

pub const DOT_EXCLAMATION: char = '\u{E001}';
pub const EXCLAMATION: char = '\u{E002}';
pub const DOT_QUESTION: char = '\u{E003}';
pub const QUESTION: char = '\u{E004}';
pub const DOT_PAREN_QUESTION: char = '\u{E005}';
pub const PAREN_QUESTION: char = '\u{E006}';
pub const DOT_SIC: char = '\u{E007}';
pub const SIC: char = '\u{E008}';

/// `--` inside a logogram: a hyphen that is part of the sign name.
pub const LITERAL_HYPHEN: char = '\u{E011}';
/// `==` inside a logogram.
pub const LITERAL_EQUALS: char = '\u{E012}';

pub const ELLIPSIS: char = '…';

pub const TEXT_EVALUATION_GLYPHS: &[char] = &[
    DOT_EXCLAMATION,
    EXCLAMATION,
    DOT_QUESTION,
    QUESTION,
    DOT_PAREN_QUESTION,
    PAREN_QUESTION,
    DOT_SIC,
    SIC,
];

/// Source forms in matching order: longer and dotted forms first.
const TEXT_EVALUATIONS: &[(&str, char)] = &[
    (".(?)", DOT_PAREN_QUESTION),
    ("(?)", PAREN_QUESTION),
    (".sic", DOT_SIC),
    ("sic", SIC),
    (".!", DOT_EXCLAMATION),
    ("!", EXCLAMATION),
    (".?", DOT_QUESTION),
    ("?", QUESTION),
];

const FRACTION_GLYPHS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Glyph for a fraction, if the fraction has one.
pub fn fraction_glyph(numerator: u32, denominator: u32) -> Option<char> {
    let text = format!("{numerator}/{denominator}");
    FRACTION_GLYPHS
        .iter()
        .find(|(_, fraction)| *fraction == text)
        .map(|(glyph, _)| *glyph)
}

/// Canonicalize one word and apply both escapers.
pub fn normalize(text: &str) -> String {
    let mut text = expand_fraction_glyphs(text);
    text = text.replace('<', "〈").replace('>', "〉");
    text = hyphens_outside_brackets(&text);
    text = text.replace("...", "…");
    text = PLUS_BEFORE_UNDERSCORE.replace_all(&text, "_").into_owned();
    text = text.replace("°m°°.°°D°", "°m.D°").replace("°f°°.°°D°", "°f.D°");
    escape(&text)
}

static HYPHEN_AFTER_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new("(〈+)-").unwrap());
static HYPHEN_BEFORE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new("-(〉+)").unwrap());
static PLUS_BEFORE_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\++_").unwrap());

/// Move hyphens out of surplus brackets until none touches a bracket's inner side.
fn hyphens_outside_brackets(text: &str) -> String {
    let mut text = text.to_string();
    loop {
        let moved = HYPHEN_AFTER_OPEN.replace_all(&text, "-$1");
        let moved = HYPHEN_BEFORE_CLOSE.replace_all(&moved, "$1-").into_owned();
        if moved == text {
            return text;
        }
        text = moved;
    }
}

/// Apply both escapers.
pub fn escape(text: &str) -> String {
    escape_text_evaluations(&escape_content(text))
}

fn expand_fraction_glyphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match FRACTION_GLYPHS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, fraction)) => out.push_str(fraction),
            None => out.push(ch),
        }
    }
    out
}

fn escapable_in_parens(ch: char) -> bool {
    is_letter(ch) || matches!(ch, '.' | '-' | '=')
}

/// Replace `(c)` by the escaped glyph for `c`.
pub fn escape_content(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '('
            && i + 2 < chars.len()
            && chars[i + 2] == ')'
            && escapable_in_parens(chars[i + 1])
        {
            out.push(escaped_letter(chars[i + 1]));
            i += 3;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn escaped_letter(ch: char) -> char {
    char::from_u32(ESCAPED_LETTER_FIRST as u32 + ch as u32).unwrap_or(ch)
}

pub fn is_escaped_letter(ch: char) -> bool {
    (ESCAPED_LETTER_FIRST..=ESCAPED_LETTER_LAST).contains(&ch)
}

/// The letter hidden behind an escaped glyph.
pub fn escaped_letter_source(ch: char) -> Option<char> {
    if is_escaped_letter(ch) {
        char::from_u32(ch as u32 - ESCAPED_LETTER_FIRST as u32)
    } else {
        None
    }
}

pub fn unescape_content(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match escaped_letter_source(ch) {
            Some(letter) => {
                out.push('(');
                out.push(letter);
                out.push(')');
            }
            None => out.push(ch),
        }
    }
    out
}

pub fn escape_text_evaluations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'outer: while !rest.is_empty() {
        for (source, glyph) in TEXT_EVALUATIONS {
            if let Some(after) = rest.strip_prefix(source) {
                out.push(*glyph);
                rest = after;
                continue 'outer;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            out.push(ch);
        }
        rest = chars.as_str();
    }
    out
}

/// Source form of one evaluation glyph.
pub fn text_evaluation_source(glyph: char) -> Option<&'static str> {
    TEXT_EVALUATIONS
        .iter()
        .find(|(_, candidate)| *candidate == glyph)
        .map(|(source, _)| *source)
}

pub fn unescape_text_evaluations(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match text_evaluation_source(ch) {
            Some(source) => out.push_str(source),
            None => out.push(ch),
        }
    }
    out
}

/// Replace `--` and `==` by their literal-separator glyphs.
pub fn escape_double_separators(text: &str) -> String {
    text.replace("--", &LITERAL_HYPHEN.to_string())
        .replace("==", &LITERAL_EQUALS.to_string())
}

/// Undo every escape applied to a word, giving back its typed form.
pub fn unescape(text: &str) -> String {
    let text = text
        .replace(LITERAL_HYPHEN, "--")
        .replace(LITERAL_EQUALS, "==");
    unescape_content(&unescape_text_evaluations(&text))
}

/// Display form of escaped text: literal separators collapse to one character.
pub fn display(text: &str) -> String {
    let text = text.replace(LITERAL_HYPHEN, "-").replace(LITERAL_EQUALS, "=");
    unescape_content(&unescape_text_evaluations(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_fraction_glyphs() {
        assert_eq!(normalize("½"), "1/2");
        assert_eq!(normalize("⅝"), "5/8");
        assert_eq!(fraction_glyph(2, 3), Some('⅔'));
        assert_eq!(fraction_glyph(2, 7), None);
    }

    #[test]
    fn rewrites_angle_brackets() {
        assert_eq!(normalize("<ša>"), "〈ša〉");
        assert_eq!(normalize("a<-ša->b"), "a-〈ša〉-b");
    }

    #[test]
    fn collapses_ellipsis_and_god_names() {
        assert_eq!(normalize("..."), "…");
        assert_eq!(normalize("°m°°.°°D°IŠKUR"), "°m.D°IŠKUR");
        assert_eq!(normalize("°f°°.°°D°ḫé-pát"), "°f.D°ḫé-pát");
    }

    #[test]
    fn drops_redundant_plus_before_underscore() {
        assert_eq!(normalize("LUGAL+_ŠU"), "LUGAL_ŠU");
        assert_eq!(normalize("LUGAL++_ŠU"), "LUGAL_ŠU");
    }

    #[test]
    fn nested_brackets_release_hyphens() {
        assert_eq!(normalize("<<-"), "-〈〈");
        assert_eq!(normalize("<-<-a"), "--〈〈a");
        assert_eq!(normalize("a->>"), "a〉〉-");
        assert_eq!(normalize(&unescape(&normalize("<<-"))), normalize("<<-"));
    }

    #[test]
    fn escapes_parenthesized_letters() {
        let escaped = escape_content("a(n)b(-)");
        assert_eq!(escaped.chars().count(), 4);
        assert!(escaped.chars().nth(1).is_some_and(is_escaped_letter));
        assert_eq!(unescape_content(&escaped), "a(n)b(-)");
    }

    #[test]
    fn leaves_question_in_parens_for_evaluations() {
        assert_eq!(escape_content("ku(?)"), "ku(?)");
        assert_eq!(escape_text_evaluations("ku(?)"), format!("ku{PAREN_QUESTION}"));
    }

    #[test]
    fn dotted_evaluations_keep_their_dot() {
        let escaped = escape_text_evaluations("LUGAL.! ŠA.sic a?");
        assert_eq!(
            escaped,
            format!("LUGAL{DOT_EXCLAMATION} ŠA{DOT_SIC} a{QUESTION}")
        );
        assert_eq!(unescape_text_evaluations(&escaped), "LUGAL.! ŠA.sic a?");
    }

    #[test]
    fn unescape_inverts_normalized_escapes() {
        let source = "ša(a)-ak-ki!-(?).sic";
        assert_eq!(unescape(&normalize(source)), source);
    }

    #[test]
    fn literal_separators_round_trip() {
        let escaped = escape_double_separators("GIŠ--ḪUR==A");
        assert!(!escaped.contains('-'));
        assert_eq!(unescape(&escaped), "GIŠ--ḪUR==A");
        assert_eq!(display(&escaped), "GIŠ-ḪUR=A");
    }
}
