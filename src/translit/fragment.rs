//! The fragments a word is tokenized into

use crate::translit::breakdown::{Breakdown, BreakdownType};
use crate::translit::language::ParagraphLanguage;
use crate::translit::status::Status;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageChange {
    pub raw_text: String,
    /// `None` when the code after `@` is unknown.
    pub language: Option<ParagraphLanguage>,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    pub raw_text: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ligature {
    pub raw_text: String,
    pub status: Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// `{S:…}`
    Sign,
    /// `{G:…}`
    Gloss,
    /// `{F:…}`
    Footnote,
    /// `{K:…}`
    Comment,
    /// `{M:…}`
    MarkOpen,
    /// `{/M:…}`
    MarkClose,
}

impl MarkerKind {
    pub fn from_tag(tag: &str) -> Option<MarkerKind> {
        match tag {
            "S" => Some(MarkerKind::Sign),
            "G" => Some(MarkerKind::Gloss),
            "F" => Some(MarkerKind::Footnote),
            "K" => Some(MarkerKind::Comment),
            "M" => Some(MarkerKind::MarkOpen),
            "/M" => Some(MarkerKind::MarkClose),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            MarkerKind::Sign => "S",
            MarkerKind::Gloss => "G",
            MarkerKind::Footnote => "F",
            MarkerKind::Comment => "K",
            MarkerKind::MarkOpen => "M",
            MarkerKind::MarkClose => "/M",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub content: String,
    pub raw_text: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FractionNumber {
    pub numerator: u32,
    pub denominator: u32,
    pub glyph: Option<char>,
    pub raw_text: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotImplemented {
    pub raw_text: String,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "fragment")]
pub enum Fragment {
    LanguageChange(LanguageChange),
    Gap(Gap),
    Ligature(Ligature),
    Marker(Marker),
    FractionNumber(FractionNumber),
    NotImplemented(NotImplemented),
    Breakdown(Breakdown),
}

impl Fragment {
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            Fragment::LanguageChange(f) => Some(&f.raw_text),
            Fragment::Gap(f) => Some(&f.raw_text),
            Fragment::Ligature(f) => Some(&f.raw_text),
            Fragment::Marker(f) => Some(&f.raw_text),
            Fragment::FractionNumber(f) => Some(&f.raw_text),
            Fragment::NotImplemented(f) => Some(&f.raw_text),
            Fragment::Breakdown(b) => Some(b.raw_text()),
        }
    }

    pub fn status(&self) -> &Status {
        match self {
            Fragment::LanguageChange(f) => &f.status,
            Fragment::Gap(f) => &f.status,
            Fragment::Ligature(f) => &f.status,
            Fragment::Marker(f) => &f.status,
            Fragment::FractionNumber(f) => &f.status,
            Fragment::NotImplemented(f) => &f.status,
            Fragment::Breakdown(b) => b.status(),
        }
    }

    /// Classification tag, for breakdowns and unclassifiable runs.
    pub fn breakdown_type(&self) -> Option<BreakdownType> {
        match self {
            Fragment::Breakdown(b) => Some(b.kind()),
            Fragment::NotImplemented(_) => Some(BreakdownType::NotImplemented),
            _ => None,
        }
    }

    pub fn as_breakdown(&self) -> Option<&Breakdown> {
        match self {
            Fragment::Breakdown(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_breakdown_mut(&mut self) -> Option<&mut Breakdown> {
        match self {
            Fragment::Breakdown(b) => Some(b),
            _ => None,
        }
    }

    pub fn is_kind(&self, kind: BreakdownType) -> bool {
        self.breakdown_type() == Some(kind)
    }
}

impl From<Breakdown> for Fragment {
    fn from(breakdown: Breakdown) -> Self {
        Fragment::Breakdown(breakdown)
    }
}
