//! Run classification
//!
//!     Literal text left over by the extraction stages is cut into pieces at `-` and
//!     `=` (and before an `_` that starts an Akkadogram). Every piece is classified on
//!     its own by the first matching entry of [RULES]; a whole run that spells a
//!     fraction short-circuits to a fraction number.
//!
//!     Consecutive pieces of the same kind are merged back into one run, separators
//!     included. An open Akkadogram keeps taking Sumerogram pieces, so `_ŠI-PÁT` is
//!     one Akkadogram. Pieces with nothing but a separator stick to the run in front
//!     of them.
//!
//!     A finished run becomes one or more breakdowns: logograms give up embedded
//!     numerals as separate Number fragments, and a Sumerogram that spells a known
//!     Akkadian preposition (`A-NA`) is an Akkadogram after all.

use crate::translit::alphabet::{
    strip_delimiters, AKKADOGRAM, AKKADOGRAM_MARKER, BASIC, DELIMITER_ONLY, FRACTION, NUMBER,
    SUMEROGRAM,
};
use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::config::TranslitConfig;
use crate::translit::escape::{display, escape_double_separators, fraction_glyph, unescape};
use crate::translit::fragment::{FractionNumber, Fragment, NotImplemented};
use crate::translit::status::{Status, StatusCode, StatusLevel};

/// One classification rule: the kind a piece gets when `matches` accepts it.
pub struct Rule {
    pub kind: BreakdownType,
    pub matches: fn(&str) -> bool,
}

fn is_delimiter_run(body: &str) -> bool {
    DELIMITER_ONLY.is_match(body)
}

fn is_number(body: &str) -> bool {
    NUMBER.is_match(body)
}

fn is_sumerogram(body: &str) -> bool {
    SUMEROGRAM.is_match(body)
}

fn is_basic(body: &str) -> bool {
    BASIC.is_match(body)
}

fn is_akkadogram(body: &str) -> bool {
    AKKADOGRAM.is_match(body)
}

/// Ordered rules; the first match wins. Numbers come before Sumerograms so that a
/// bare `4` is a numeral.
pub static RULES: &[Rule] = &[
    Rule {
        kind: BreakdownType::Delimiter,
        matches: is_delimiter_run,
    },
    Rule {
        kind: BreakdownType::Number,
        matches: is_number,
    },
    Rule {
        kind: BreakdownType::Sumerogram,
        matches: is_sumerogram,
    },
    Rule {
        kind: BreakdownType::Basic,
        matches: is_basic,
    },
    Rule {
        kind: BreakdownType::Akkadogram,
        matches: is_akkadogram,
    },
];

/// Kind of one piece body; `None` for an empty body.
pub fn classify_piece(body: &str) -> Option<BreakdownType> {
    if body.is_empty() {
        return None;
    }
    let kind = RULES
        .iter()
        .find(|rule| (rule.matches)(body))
        .map_or(BreakdownType::NotImplemented, |rule| rule.kind);
    Some(kind)
}

/// Classify one literal run into fragments.
pub fn classify(text: &str, config: &TranslitConfig) -> Vec<Fragment> {
    if let Some(fraction) = fraction(text) {
        return vec![fraction];
    }

    let escaped = escape_double_separators(text);
    let mut runs: Vec<Run> = Vec::new();
    let mut pending = String::new();

    for piece in split_pieces(&escaped) {
        let body = body_of(&piece);
        let Some(kind) = classify_piece(body) else {
            match runs.last_mut() {
                Some(run) => run.text.push_str(&piece),
                None => pending.push_str(&piece),
            }
            continue;
        };
        tracing::trace!("Piece '{}' is {:?}", unescape(&piece), kind);

        let piece = if kind == BreakdownType::Akkadogram {
            let separator = &piece[..piece.len() - body.len()];
            format!("{separator}{}", body.trim_start_matches(AKKADOGRAM_MARKER))
        } else {
            piece
        };

        match runs.last_mut() {
            Some(run) if run.continues_with(kind) => run.text.push_str(&piece),
            _ => runs.push(Run {
                kind,
                text: std::mem::take(&mut pending) + &piece,
            }),
        }
    }

    if !pending.is_empty() {
        runs.push(Run {
            kind: BreakdownType::NotImplemented,
            text: pending,
        });
    }

    runs.into_iter()
        .flat_map(|run| run.finish(config))
        .collect()
}

struct Run {
    kind: BreakdownType,
    text: String,
}

impl Run {
    fn continues_with(&self, kind: BreakdownType) -> bool {
        self.kind == kind
            || (self.kind == BreakdownType::Akkadogram && kind == BreakdownType::Sumerogram)
    }

    fn finish(self, config: &TranslitConfig) -> Vec<Fragment> {
        if self.kind == BreakdownType::NotImplemented {
            let raw_text = unescape(&self.text);
            let status = Status::with_event(
                StatusLevel::Critical,
                StatusCode::Parser,
                format!("could not classify '{raw_text}'"),
            );
            return vec![Fragment::NotImplemented(NotImplemented { raw_text, status })];
        }

        let kind = if self.kind == BreakdownType::Sumerogram && spells_preposition(&self.text, config)
        {
            BreakdownType::Akkadogram
        } else {
            self.kind
        };

        Breakdown::build(kind, &self.text, true)
            .into_iter()
            .map(|mut breakdown| {
                if !breakdown.kind().is_logogram() && has_literal_separator(breakdown.raw_text()) {
                    let message = format!(
                        "doubled separator outside a logogram in '{}'",
                        breakdown.raw_text()
                    );
                    breakdown
                        .status_mut()
                        .add(StatusLevel::Minor, StatusCode::Unexpected, message);
                }
                Fragment::from(breakdown)
            })
            .collect()
    }
}

fn spells_preposition(text: &str, config: &TranslitConfig) -> bool {
    let plain = strip_delimiters(&display(text));
    config.is_preposition(plain.trim_start_matches(['-', '=']))
}

fn has_literal_separator(raw_text: &str) -> bool {
    raw_text.contains("--") || raw_text.contains("==")
}

/// Cut a run into pieces, each keeping its leading separator.
fn split_pieces(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        let starts_piece = match ch {
            '-' | '=' => true,
            AKKADOGRAM_MARKER => !body_of(&current).is_empty(),
            _ => false,
        };
        if starts_piece && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

fn body_of(piece: &str) -> &str {
    piece.strip_prefix(['-', '=']).unwrap_or(piece)
}

fn fraction(text: &str) -> Option<Fragment> {
    let caps = FRACTION.captures(text)?;
    let (Ok(numerator), Ok(denominator)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>())
    else {
        let status = Status::with_event(
            StatusLevel::Error,
            StatusCode::Malformed,
            format!("fraction '{text}' is out of range"),
        );
        return Some(Fragment::NotImplemented(NotImplemented {
            raw_text: text.to_string(),
            status,
        }));
    };
    Some(Fragment::FractionNumber(FractionNumber {
        numerator,
        denominator,
        glyph: fraction_glyph(numerator, denominator),
        raw_text: text.to_string(),
        status: Status::new(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<(Option<BreakdownType>, String)> {
        classify(text, TranslitConfig::defaults())
            .iter()
            .map(|f| (f.breakdown_type(), f.raw_text().unwrap_or_default().to_string()))
            .collect()
    }

    #[test]
    fn rule_table_order() {
        assert_eq!(classify_piece("4"), Some(BreakdownType::Number));
        assert_eq!(classify_piece("[n]"), Some(BreakdownType::Number));
        assert_eq!(classify_piece("[]"), Some(BreakdownType::Delimiter));
        assert_eq!(classify_piece("LUGAL"), Some(BreakdownType::Sumerogram));
        assert_eq!(classify_piece("uš"), Some(BreakdownType::Basic));
        assert_eq!(classify_piece("_ŠI"), Some(BreakdownType::Akkadogram));
        assert_eq!(classify_piece("Ab#"), Some(BreakdownType::NotImplemented));
        assert_eq!(classify_piece(""), None);
    }

    #[test]
    fn splits_pieces_with_separators() {
        assert_eq!(split_pieces("LUGAL-uš"), vec!["LUGAL", "-uš"]);
        assert_eq!(split_pieces("-šar=ma"), vec!["-šar", "=ma"]);
        assert_eq!(split_pieces("LUGAL_ŠU"), vec!["LUGAL", "_ŠU"]);
        assert_eq!(split_pieces("ša-_ŠI"), vec!["ša", "-_ŠI"]);
    }

    #[test]
    fn different_kinds_flush() {
        assert_eq!(
            kinds("LUGAL-uš"),
            vec![
                (Some(BreakdownType::Sumerogram), "LUGAL".to_string()),
                (Some(BreakdownType::Basic), "-uš".to_string()),
            ]
        );
    }

    #[test]
    fn same_kinds_merge() {
        assert_eq!(
            kinds("ša-ra-a"),
            vec![(Some(BreakdownType::Basic), "ša-ra-a".to_string())]
        );
    }

    #[test]
    fn akkadogram_absorbs_sumerogram_pieces() {
        assert_eq!(
            kinds("_ŠI-PÁT"),
            vec![(Some(BreakdownType::Akkadogram), "ŠI-PÁT".to_string())]
        );
    }

    #[test]
    fn preposition_becomes_akkadogram() {
        assert_eq!(
            kinds("A-NA"),
            vec![(Some(BreakdownType::Akkadogram), "A-NA".to_string())]
        );
    }

    #[test]
    fn fraction_run() {
        let fragments = classify("1/2", TranslitConfig::defaults());
        match &fragments[..] {
            [Fragment::FractionNumber(fraction)] => {
                assert_eq!((fraction.numerator, fraction.denominator), (1, 2));
                assert_eq!(fraction.glyph, Some('½'));
            }
            other => panic!("Unexpected fragments: {:?}", other),
        }
    }

    #[test]
    fn oversized_fraction_is_malformed() {
        let fragments = classify("99999999999/2", TranslitConfig::defaults());
        match &fragments[..] {
            [Fragment::NotImplemented(fragment)] => {
                assert_eq!(fragment.raw_text, "99999999999/2");
                assert_eq!(fragment.status.level(), StatusLevel::Error);
                assert!(fragment.status.has_code(StatusCode::Malformed));
            }
            other => panic!("Unexpected fragments: {:?}", other),
        }
    }

    #[test]
    fn trailing_separator_sticks_to_run() {
        assert_eq!(
            kinds("ša-"),
            vec![(Some(BreakdownType::Basic), "ša-".to_string())]
        );
    }

    #[test]
    fn doubled_separator_outside_logogram() {
        let fragments = classify("ša--ri", TranslitConfig::defaults());
        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].status().has_code(StatusCode::Unexpected));

        let logogram = classify("GIŠ--ḪUR", TranslitConfig::defaults());
        assert_eq!(logogram.len(), 1);
        assert!(logogram[0].status().is_ok());
    }

    #[test]
    fn unclassifiable_run() {
        let fragments = classify("Ab#", TranslitConfig::defaults());
        assert_eq!(fragments[0].breakdown_type(), Some(BreakdownType::NotImplemented));
        assert_eq!(fragments[0].status().level(), StatusLevel::Critical);
    }
}
