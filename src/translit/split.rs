//! Split decomposition
//!
//!     A split is one separator-delimited piece of a typed run: `ša`, `-ra` or `.GUR₄`.
//!     Decomposing it turns the typed text into slices:
//!
//!         1. Text after the subscript marker `|` goes to the subscript, the rest to
//!            the main part. More than one marker is reported and the extra markers
//!            are dropped.
//!         2. Delimiters are set aside while trailing sign indices typed as plain
//!            digits (`GUR4`, `ša2`, `KAx`) become subscript digits. Only a digit run
//!            right after a letter and before the end or a `.` counts.
//!         3. The delimiters are put back as metadata slices at their original
//!            offsets, between content slices.
//!         4. Evaluation glyphs at the end of the last content slice are split off.
//!         5. `〈 〈 content 〉 〉` windows collapse into one surplus slice.
//!
//!     Erasure markers do not know whether they open or close an erasure. That is
//!     only decided by [Split::thread], which walks the slices with the position
//!     carried over from everything before the split.

use crate::translit::alphabet::{
    index_digit, is_letter, is_text_evaluation, SUBSCRIPT_MARKER,
};
use crate::translit::slice::{scan, Metadata, Position, Slice, SliceToken};
use crate::translit::status::{Status, StatusCode, StatusLevel};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Hyphen,
    Equals,
    Dot,
}

impl Separator {
    pub fn from_char(ch: char) -> Option<Separator> {
        match ch {
            '-' => Some(Separator::Hyphen),
            '=' => Some(Separator::Equals),
            '.' => Some(Separator::Dot),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Equals => '=',
            Separator::Dot => '.',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Split {
    separator: Option<Separator>,
    main_part: Vec<Slice>,
    subscript: Vec<Slice>,
    position: Position,
    status: Status,
}

impl Split {
    /// Decompose `text` (without its leading separator) and thread `incoming`
    /// through it.
    pub fn parse(separator: Option<Separator>, text: &str, incoming: Position) -> Split {
        let mut status = Status::new();
        let mut parts = text.split(SUBSCRIPT_MARKER);
        let main_text = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();
        if rest.len() > 1 {
            status.add(
                StatusLevel::Minor,
                StatusCode::Malformed,
                format!("more than one subscript marker in '{text}'"),
            );
        }
        let subscript_text = rest.concat();

        let mut split = Split {
            separator,
            main_part: decompose(main_text),
            subscript: decompose(&subscript_text),
            position: incoming,
            status,
        };
        split.thread(incoming);
        split
    }

    /// A split made of ready slices, e.g. evaluations moved off a gloss.
    pub fn from_slices(separator: Option<Separator>, main_part: Vec<Slice>) -> Split {
        Split {
            separator,
            main_part,
            subscript: Vec::new(),
            position: Position::Initial,
            status: Status::new(),
        }
    }

    /// Assign erasure positions starting from `incoming` and return the position
    /// after the last slice.
    pub fn thread(&mut self, incoming: Position) -> Position {
        let mut position = incoming;
        for slice in self.main_part.iter_mut().chain(self.subscript.iter_mut()) {
            if let Slice::Metadata(metadata) = slice {
                if metadata.is_erasure() {
                    metadata.position = position;
                    position = position.toggle();
                }
            }
        }
        self.position = position;
        position
    }

    pub fn separator(&self) -> Option<Separator> {
        self.separator
    }

    pub fn main_part(&self) -> &[Slice] {
        &self.main_part
    }

    pub(crate) fn main_part_mut(&mut self) -> &mut Vec<Slice> {
        &mut self.main_part
    }

    pub fn subscript(&self) -> &[Slice] {
        &self.subscript
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_empty(&self) -> bool {
        self.main_part.is_empty() && self.subscript.is_empty()
    }

    /// The split as it was typed, separator included.
    pub fn source_text(&self) -> String {
        let mut text = String::new();
        if let Some(separator) = self.separator {
            text.push(separator.as_char());
        }
        for slice in &self.main_part {
            text.push_str(&slice.source_text());
        }
        if !self.subscript.is_empty() {
            text.push(SUBSCRIPT_MARKER);
            for slice in &self.subscript {
                text.push_str(&slice.source_text());
            }
        }
        text
    }

    /// Readable content of the main part, separator included.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        if let Some(separator) = self.separator {
            text.push(separator.as_char());
        }
        for slice in &self.main_part {
            text.push_str(&slice.plain_text());
        }
        text
    }
}

/// Steps 2-5 of the decomposition for one part of a split.
fn decompose(text: &str) -> Vec<Slice> {
    if text.is_empty() {
        return Vec::new();
    }
    let tokens = scan(text);

    let stripped: Vec<char> = tokens
        .iter()
        .filter(|(token, _)| *token == SliceToken::Text)
        .flat_map(|(_, segment)| segment.chars())
        .collect();
    let converted = convert_index_digits(&stripped);

    let mut slices = Vec::with_capacity(tokens.len());
    let mut offset = 0;
    for (token, segment) in tokens {
        match token {
            SliceToken::Text => {
                let len = segment.chars().count();
                let content: String = converted[offset..offset + len].iter().collect();
                offset += len;
                slices.push(Slice::Content(content));
            }
            SliceToken::Delimiter => {
                if let Some(symbol) = segment.chars().next() {
                    slices.push(Slice::Metadata(Metadata::new(symbol)));
                }
            }
        }
    }

    split_trailing_evaluation(&mut slices);
    collapse_surplus(slices)
}

/// Turn `letters + digits` (or `letters + x`) before the end or a `.` into an index.
fn convert_index_digits(chars: &[char]) -> Vec<char> {
    let mut out = chars.to_vec();
    let len = chars.len();
    let terminated = |at: usize| at == len || chars[at] == '.';

    let mut i = 0;
    while i < len {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < len && chars[i].is_ascii_digit() {
                i += 1;
            }
            if start > 0 && is_letter(chars[start - 1]) && terminated(i) {
                for j in start..i {
                    out[j] = index_digit(chars[j]).unwrap_or(chars[j]);
                }
            }
            continue;
        }
        if chars[i] == 'x' && i > 0 && is_letter(chars[i - 1]) && terminated(i + 1) {
            out[i] = 'ₓ';
        }
        i += 1;
    }
    out
}

fn split_trailing_evaluation(slices: &mut Vec<Slice>) {
    let Some(index) = slices.iter().rposition(|slice| slice.as_content().is_some()) else {
        return;
    };
    let Slice::Content(text) = &slices[index] else {
        return;
    };
    let chars: Vec<char> = text.chars().collect();
    let keep = chars
        .iter()
        .rposition(|ch| !is_text_evaluation(*ch))
        .map_or(0, |last| last + 1);
    if keep == chars.len() {
        return;
    }

    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[keep..].iter().collect();
    if head.is_empty() {
        slices[index] = Slice::TextEvaluation(tail);
    } else {
        slices[index] = Slice::Content(head);
        slices.insert(index + 1, Slice::TextEvaluation(tail));
    }
}

fn is_symbol(slice: Option<&Slice>, symbol: char) -> bool {
    matches!(slice, Some(Slice::Metadata(metadata)) if metadata.symbol == symbol)
}

fn collapse_surplus(slices: Vec<Slice>) -> Vec<Slice> {
    let mut out = Vec::with_capacity(slices.len());
    let mut i = 0;
    while i < slices.len() {
        if is_symbol(slices.get(i), '〈') && is_symbol(slices.get(i + 1), '〈') {
            let (inner, close) = match slices.get(i + 2) {
                Some(Slice::Content(text)) => (text.clone(), i + 3),
                _ => (String::new(), i + 2),
            };
            if is_symbol(slices.get(close), '〉') && is_symbol(slices.get(close + 1), '〉') {
                out.push(Slice::Surplus(inner));
                i = close + 2;
                continue;
            }
        }
        out.push(slices[i].clone());
        i += 1;
    }
    out
}
