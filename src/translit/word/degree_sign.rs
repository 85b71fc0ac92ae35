//! Degree-sign spans
//!
//!     Text between two degree signs is a determinative (`°MUNUS°`, `°D°`, `°m.D°`), a
//!     gloss written in small signs (`°ra°`) or something the tokenizer cannot place.
//!
//!     Damage brackets may not stay inside a gloss. Leading brackets and opening
//!     brackets inside the gloss move to the literal text in front of the span;
//!     closing brackets inside it and trailing brackets move behind it. The gloss `di`
//!     is written the other way around, so its brackets move in the opposite
//!     directions.

use super::Piece;
use crate::translit::alphabet::{
    is_damage_bracket, is_opening_bracket, DEGREE_SIGN_SEGMENT, DETERMINATIVE_CONTENT,
    GLOSSING_CONTENT,
};
use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::config::TranslitConfig;
use crate::translit::escape::unescape;
use crate::translit::fragment::Fragment;
use crate::translit::status::{StatusCode, StatusLevel};

/// Cut all `°…°` spans out of `text`.
pub fn extract(text: &str, config: &TranslitConfig) -> Vec<Piece> {
    let mut pieces: Vec<Piece> = Vec::new();
    let mut pending_suffix = String::new();
    let mut last = 0;

    for caps in DEGREE_SIGN_SEGMENT.captures_iter(text) {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let mut literal = std::mem::take(&mut pending_suffix);
        literal.push_str(&text[last..whole.start()]);
        last = whole.end();

        let span = classify_span(content.as_str(), config);
        tracing::trace!("Degree-sign span '{}' is {:?}", content.as_str(), span.kind());

        match span {
            Span::Glossing(gloss) => {
                literal.push_str(&gloss.prefix);
                push_text(&mut pieces, literal);
                pieces.push(Piece::Fragment(Fragment::from(gloss.breakdown)));
                pending_suffix = gloss.suffix;
            }
            Span::Other(breakdown) => {
                push_text(&mut pieces, literal);
                pieces.push(Piece::Fragment(Fragment::from(breakdown)));
            }
        }
    }

    let mut rest = pending_suffix;
    rest.push_str(&text[last..]);
    push_text(&mut pieces, rest);
    pieces
}

/// Append to the trailing text piece, or start a new one.
fn push_text(pieces: &mut Vec<Piece>, text: String) {
    if text.is_empty() {
        return;
    }
    match pieces.last_mut() {
        Some(Piece::Text(last)) => last.push_str(&text),
        _ => pieces.push(Piece::Text(text)),
    }
}

enum Span {
    Glossing(Gloss),
    Other(Breakdown),
}

impl Span {
    fn kind(&self) -> BreakdownType {
        match self {
            Span::Glossing(gloss) => gloss.breakdown.kind(),
            Span::Other(breakdown) => breakdown.kind(),
        }
    }
}

struct Gloss {
    breakdown: Breakdown,
    prefix: String,
    suffix: String,
}

fn classify_span(content: &str, config: &TranslitConfig) -> Span {
    if content.is_empty() || content.contains(' ') {
        return Span::Other(undefined(
            content,
            StatusCode::Undefined,
            format!("undefined degree-sign content '{}'", unescape(content)),
        ));
    }
    if config.is_god_name(content) || DETERMINATIVE_CONTENT.is_match(content) {
        return Span::Other(Breakdown::new(BreakdownType::Determinative, content));
    }
    if GLOSSING_CONTENT.is_match(content) {
        return Span::Glossing(relocate_brackets(content));
    }
    Span::Other(undefined(
        content,
        StatusCode::Malformed,
        format!("malformed degree-sign content '{}'", unescape(content)),
    ))
}

fn undefined(content: &str, code: StatusCode, message: String) -> Breakdown {
    let mut breakdown = Breakdown::new(BreakdownType::UndefinedDegreeSign, content);
    breakdown.status_mut().add(StatusLevel::Error, code, message);
    breakdown
}

fn relocate_brackets(content: &str) -> Gloss {
    let chars: Vec<char> = content.chars().collect();
    let first = chars.iter().position(|ch| !is_damage_bracket(*ch));
    let last = chars.iter().rposition(|ch| !is_damage_bracket(*ch));

    let mut prefix = String::new();
    let mut suffix = String::new();
    let mut core = String::new();
    for (i, ch) in chars.iter().copied().enumerate() {
        if !is_damage_bracket(ch) {
            core.push(ch);
            continue;
        }
        let leading = first.map_or(true, |first| i < first);
        let trailing = last.is_some_and(|last| i > last);
        if leading || (!trailing && is_opening_bracket(ch)) {
            prefix.push(ch);
        } else {
            suffix.push(ch);
        }
    }

    if core == "di" {
        std::mem::swap(&mut prefix, &mut suffix);
    }

    Gloss {
        breakdown: Breakdown::new(BreakdownType::Glossing, &core),
        prefix,
        suffix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(pieces: &[Piece]) -> Vec<String> {
        pieces
            .iter()
            .map(|piece| match piece {
                Piece::Text(text) => format!("text:{text}"),
                Piece::Fragment(fragment) => format!(
                    "{:?}:{}",
                    fragment.breakdown_type().unwrap(),
                    fragment.raw_text().unwrap()
                ),
            })
            .collect()
    }

    #[test]
    fn determinative_before_logogram() {
        let pieces = extract("°MUNUS°ŠU.GI", TranslitConfig::defaults());
        assert_eq!(describe(&pieces), vec!["Determinative:MUNUS", "text:ŠU.GI"]);
    }

    #[test]
    fn god_name_forms_are_determinatives() {
        let pieces = extract("°m.D°IŠKUR", TranslitConfig::defaults());
        assert_eq!(describe(&pieces), vec!["Determinative:m.D", "text:IŠKUR"]);
    }

    #[test]
    fn gloss_between_literals() {
        let pieces = extract("ḫa-an°an°-da", TranslitConfig::defaults());
        assert_eq!(
            describe(&pieces),
            vec!["text:ḫa-an", "Glossing:an", "text:-da"]
        );
    }

    #[test]
    fn gloss_brackets_move_out() {
        let pieces = extract("ḫa°[a]n°-da", TranslitConfig::defaults());
        assert_eq!(
            describe(&pieces),
            vec!["text:ḫa[", "Glossing:an", "text:]-da"]
        );
    }

    #[test]
    fn di_gloss_moves_brackets_the_other_way() {
        let pieces = extract("ša°[di°", TranslitConfig::defaults());
        assert_eq!(describe(&pieces), vec!["text:ša", "Glossing:di", "text:["]);
    }

    #[test]
    fn empty_and_spaced_content_is_undefined() {
        for text in ["°°", "°a b°"] {
            let pieces = extract(text, TranslitConfig::defaults());
            let Piece::Fragment(fragment) = &pieces[0] else {
                panic!("Expected a fragment for {text}");
            };
            assert!(fragment.is_kind(BreakdownType::UndefinedDegreeSign));
            assert_eq!(fragment.status().level(), StatusLevel::Error);
            assert!(fragment.status().has_code(StatusCode::Undefined));
        }
    }

    #[test]
    fn mixed_case_content_is_malformed() {
        let pieces = extract("°Ab°", TranslitConfig::defaults());
        let Piece::Fragment(fragment) = &pieces[0] else {
            panic!("Expected a fragment");
        };
        assert!(fragment.status().has_code(StatusCode::Malformed));
    }
}
