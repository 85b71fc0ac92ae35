//! Typed fragments built from splits
//!
//!     A [Breakdown] is one classified run of a word: a Sumerogram such as
//!     `NINDA.GUR₄.RA`, a syllabic run such as `-šar-ru-um-ma`, a determinative, a
//!     numeral. It owns the run's [Split]s in order and the erasure position reached
//!     after its last split.
//!
//!     Logogram-like kinds (Sumerogram, Akkadogram, Determinative) split on `.` as well
//!     as on `-` and `=`; every other kind only on `-` and `=`.
//!
//!     Breakdowns of the collectable kinds (Basic, Sumerogram) may absorb neighbouring
//!     fragments during the collection pass. Absorbed members keep their own splits,
//!     so an exporter can render each of them separately.

use crate::translit::alphabet::{strip_delimiters, INSCRIBED_X, NUMBER};
use crate::translit::escape::unescape;
use crate::translit::slice::{Position, Slice};
use crate::translit::split::{Separator, Split};
use crate::translit::status::Status;
use serde::Serialize;

/// Classification tag driving dispatch at construction and export time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BreakdownType {
    Determinative,
    Glossing,
    UndefinedDegreeSign,
    Delimiter,
    Number,
    Basic,
    Akkadogram,
    Sumerogram,
    NotImplemented,
}

impl BreakdownType {
    /// Kinds that open a collection.
    pub fn is_collectable(self) -> bool {
        matches!(self, BreakdownType::Basic | BreakdownType::Sumerogram)
    }

    pub fn is_logogram(self) -> bool {
        matches!(
            self,
            BreakdownType::Sumerogram | BreakdownType::Akkadogram | BreakdownType::Determinative
        )
    }

    fn splits_at(self, ch: char) -> bool {
        match ch {
            '-' | '=' => true,
            '.' => self.is_logogram(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    kind: BreakdownType,
    raw_text: String,
    splits: Vec<Split>,
    members: Vec<Breakdown>,
    position: Position,
    status: Status,
}

impl Breakdown {
    /// Build one breakdown from escaped run text.
    pub fn new(kind: BreakdownType, text: &str) -> Breakdown {
        let text = if matches!(kind, BreakdownType::Sumerogram | BreakdownType::Akkadogram) {
            normalize_inscribed(text)
        } else {
            text.to_string()
        };

        let mut status = Status::new();
        let mut splits = Vec::new();
        let mut position = Position::Initial;
        for (separator, piece) in split_pieces(kind, &text) {
            let split = Split::parse(separator, &piece, position);
            position = split.position();
            status.absorb(split.status());
            splits.push(split);
        }

        Breakdown {
            kind,
            raw_text: unescape(&text),
            splits,
            members: Vec::new(),
            position,
            status,
        }
    }

    /// Build a run, pulling embedded numerals out of logograms when asked to.
    ///
    /// `GÍN.4` becomes a Sumerogram `GÍN` and a Number `.4`.
    pub fn build(kind: BreakdownType, text: &str, extract_numbers: bool) -> Vec<Breakdown> {
        if !(extract_numbers && kind.is_logogram() && kind != BreakdownType::Determinative) {
            return vec![Breakdown::new(kind, text)];
        }

        let mut groups: Vec<(bool, String)> = Vec::new();
        for (separator, piece) in split_pieces(kind, text) {
            let is_number = !piece.is_empty() && NUMBER.is_match(&piece);
            let mut segment = String::new();
            if let Some(separator) = separator {
                segment.push(separator.as_char());
            }
            segment.push_str(&piece);
            match groups.last_mut() {
                Some((last_is_number, buffer)) if *last_is_number == is_number => {
                    buffer.push_str(&segment)
                }
                _ => groups.push((is_number, segment)),
            }
        }

        groups
            .into_iter()
            .map(|(is_number, text)| {
                let kind = if is_number { BreakdownType::Number } else { kind };
                Breakdown::new(kind, &text)
            })
            .collect()
    }

    /// A Basic fragment holding nothing but evaluation slices.
    pub fn from_text_evaluations(evaluations: Vec<Slice>) -> Breakdown {
        let raw_text = evaluations.iter().map(Slice::source_text).collect();
        Breakdown {
            kind: BreakdownType::Basic,
            raw_text,
            splits: vec![Split::from_slices(None, evaluations)],
            members: Vec::new(),
            position: Position::Initial,
            status: Status::new(),
        }
    }

    pub fn kind(&self) -> BreakdownType {
        self.kind
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn splits(&self) -> &[Split] {
        &self.splits
    }

    pub fn members(&self) -> &[Breakdown] {
        &self.members
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut Status {
        &mut self.status
    }

    /// Source form rebuilt from the splits (index digits normalized).
    pub fn text(&self) -> String {
        self.splits.iter().map(Split::source_text).collect()
    }

    /// Separators and readable content only.
    pub fn plain_text(&self) -> String {
        self.splits.iter().map(Split::plain_text).collect()
    }

    /// Value of a numeral fragment, brackets ignored.
    pub fn integer(&self) -> Option<u32> {
        let digits = strip_delimiters(&self.plain_text());
        if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn is_collection(&self) -> bool {
        !self.members.is_empty()
    }

    /// Take `member` into this collection.
    pub fn absorb(&mut self, member: Breakdown) {
        self.status.absorb(&member.status);
        self.members.push(member);
    }

    /// Thread the erasure position through all splits and members in order.
    pub fn thread(&mut self, incoming: Position) -> Position {
        let mut position = incoming;
        for split in &mut self.splits {
            position = split.thread(position);
        }
        for member in &mut self.members {
            position = member.thread(position);
        }
        self.position = position;
        position
    }

    /// Remove and return every evaluation slice of the main parts.
    pub fn take_text_evaluations(&mut self) -> Vec<Slice> {
        let mut taken = Vec::new();
        for split in &mut self.splits {
            let (evaluations, rest): (Vec<Slice>, Vec<Slice>) = split
                .main_part_mut()
                .drain(..)
                .partition(Slice::is_text_evaluation);
            *split.main_part_mut() = rest;
            taken.extend(evaluations);
        }
        taken
    }

    /// Insert `evaluations` at the start of the first split.
    pub fn prepend_text_evaluations(&mut self, evaluations: Vec<Slice>) {
        if self.splits.is_empty() {
            self.splits.push(Split::from_slices(None, Vec::new()));
        }
        let main = self.splits[0].main_part_mut();
        main.splice(0..0, evaluations);
    }

    /// Pop an evaluation slice heading the first split.
    pub fn take_leading_text_evaluation(&mut self) -> Option<Slice> {
        let main = self.splits.first_mut()?.main_part_mut();
        if main.first().is_some_and(Slice::is_text_evaluation) {
            Some(main.remove(0))
        } else {
            None
        }
    }

    pub fn push_text_evaluation(&mut self, evaluation: Slice) {
        if self.splits.is_empty() {
            self.splits.push(Split::from_slices(None, Vec::new()));
        }
        if let Some(last) = self.splits.last_mut() {
            last.main_part_mut().push(evaluation);
        }
    }

    /// Merge directly adjacent evaluation slices within each split.
    pub fn normalize_text_evaluations(&mut self) {
        for split in &mut self.splits {
            let main = split.main_part_mut();
            let mut merged: Vec<Slice> = Vec::with_capacity(main.len());
            for slice in main.drain(..) {
                match (merged.last_mut(), slice) {
                    (Some(Slice::TextEvaluation(previous)), Slice::TextEvaluation(next)) => {
                        previous.push_str(&next)
                    }
                    (_, slice) => merged.push(slice),
                }
            }
            *main = merged;
        }
    }
}

/// Cut run text into `(leading separator, piece)` pairs for `kind`.
fn split_pieces(kind: BreakdownType, text: &str) -> Vec<(Option<Separator>, String)> {
    let mut pieces = Vec::new();
    let mut separator = None;
    let mut current = String::new();
    let mut started = false;
    for ch in text.chars() {
        if kind.splits_at(ch) {
            if started || !current.is_empty() {
                pieces.push((separator, std::mem::take(&mut current)));
            }
            separator = Separator::from_char(ch);
            started = true;
        } else {
            current.push(ch);
        }
    }
    if started || !current.is_empty() {
        pieces.push((separator, current));
    }
    pieces
}

/// `KAxU` → `KA×U`; repeated so chained inscriptions (`AxBxC`) all convert.
fn normalize_inscribed(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = INSCRIBED_X.replace_all(&current, "${1}×${2}").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(breakdowns: &[Breakdown]) -> Vec<(BreakdownType, String)> {
        breakdowns.iter().map(|b| (b.kind(), b.text())).collect()
    }

    #[test]
    fn sumerogram_splits_on_dots() {
        let breakdown = Breakdown::new(BreakdownType::Sumerogram, "NINDA.GUR₄.RA");
        assert_eq!(breakdown.splits().len(), 3);
        assert_eq!(breakdown.text(), "NINDA.GUR₄.RA");
        assert_eq!(breakdown.splits()[1].separator(), Some(Separator::Dot));
    }

    #[test]
    fn basic_keeps_dots_and_leading_hyphen() {
        let breakdown = Breakdown::new(BreakdownType::Basic, "-šar-ru");
        assert_eq!(breakdown.splits().len(), 2);
        assert_eq!(breakdown.splits()[0].separator(), Some(Separator::Hyphen));
        assert_eq!(breakdown.text(), "-šar-ru");
    }

    #[test]
    fn trailing_separator_yields_empty_split() {
        let breakdown = Breakdown::new(BreakdownType::Basic, "ša-");
        assert_eq!(breakdown.splits().len(), 2);
        assert!(breakdown.splits()[1].is_empty());
        assert_eq!(breakdown.text(), "ša-");
    }

    #[test]
    fn normalizes_inscribed_signs() {
        assert_eq!(Breakdown::new(BreakdownType::Sumerogram, "KAxU").text(), "KA×U");
        assert_eq!(Breakdown::new(BreakdownType::Sumerogram, "AxBxC").raw_text(), "A×B×C");
        assert_eq!(Breakdown::new(BreakdownType::Basic, "ax").raw_text(), "ax");
    }

    #[test]
    fn extracts_numbers_from_logograms() {
        let built = Breakdown::build(BreakdownType::Sumerogram, "GÍN.4", true);
        assert_eq!(
            texts(&built),
            vec![
                (BreakdownType::Sumerogram, "GÍN".to_string()),
                (BreakdownType::Number, ".4".to_string()),
            ]
        );
    }

    #[test]
    fn keeps_numbers_when_not_extracting() {
        let built = Breakdown::build(BreakdownType::Sumerogram, "30", false);
        assert_eq!(texts(&built), vec![(BreakdownType::Sumerogram, "30".to_string())]);
    }

    #[test]
    fn index_digits_are_not_numbers() {
        let built = Breakdown::build(BreakdownType::Sumerogram, "NINDA.GUR₄.RA", true);
        assert_eq!(built.len(), 1);
    }

    #[test]
    fn integer_ignores_brackets() {
        assert_eq!(Breakdown::new(BreakdownType::Number, "[3]0").integer(), Some(30));
        assert_eq!(Breakdown::new(BreakdownType::Number, "n").integer(), None);
    }

    #[test]
    fn threads_through_members() {
        let mut head = Breakdown::new(BreakdownType::Basic, "*ša");
        head.absorb(Breakdown::new(BreakdownType::Basic, "-ra*"));
        assert!(head.is_collection());
        assert_eq!(head.thread(Position::Initial), Position::Initial);
        assert_eq!(head.thread(Position::End), Position::End);
    }

    #[test]
    fn merges_adjacent_evaluations() {
        let mut breakdown = Breakdown::new(BreakdownType::Basic, "ša");
        breakdown.push_text_evaluation(Slice::TextEvaluation("a".into()));
        breakdown.push_text_evaluation(Slice::TextEvaluation("b".into()));
        breakdown.normalize_text_evaluations();
        assert_eq!(
            breakdown.splits()[0].main_part(),
            &[Slice::Content("ša".into()), Slice::TextEvaluation("ab".into())]
        );
    }
}
