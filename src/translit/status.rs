//! Severity-graded diagnostics attached to every produced node
//!
//!     The tokenizer never fails: anything it cannot make sense of is still mapped to a
//!     fragment, and the trouble is recorded as a [StatusEvent] in the node's [Status].
//!     Callers decide what to do with the trail by looking at [Status::level].
//!
//!     A status is append-only. Combining two statuses comes in two flavours:
//!     [Status::merge] only raises the level, while [Status::absorb] also copies the
//!     events over. The word tokenizer absorbs the statuses of all fragments it
//!     produces so that one word-level status carries the complete trail.

use serde::Serialize;
use std::fmt;

/// Totally ordered severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    #[default]
    Ok,
    Info,
    Minor,
    Moderate,
    Serious,
    Error,
    Critical,
    Severe,
    Maximal,
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusLevel::Ok => "ok",
            StatusLevel::Info => "info",
            StatusLevel::Minor => "minor",
            StatusLevel::Moderate => "moderate",
            StatusLevel::Serious => "serious",
            StatusLevel::Error => "error",
            StatusLevel::Critical => "critical",
            StatusLevel::Severe => "severe",
            StatusLevel::Maximal => "maximal",
        };
        write!(f, "{name}")
    }
}

/// What kind of problem an event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCode {
    Parser,
    Required,
    Unexpected,
    Empty,
    Undefined,
    Unknown,
    Malformed,
    Trim,
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Parser => "parser",
            StatusCode::Required => "required",
            StatusCode::Unexpected => "unexpected",
            StatusCode::Empty => "empty",
            StatusCode::Undefined => "undefined",
            StatusCode::Unknown => "unknown",
            StatusCode::Malformed => "malformed",
            StatusCode::Trim => "trim",
        };
        write!(f, "{name}")
    }
}

/// One immutable diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    level: StatusLevel,
    code: StatusCode,
    message: String,
}

impl StatusEvent {
    pub fn new(level: StatusLevel, code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            level,
            code,
            message: message.into(),
        }
    }

    pub fn level(&self) -> StatusLevel {
        self.level
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StatusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.level, self.code, self.message)
    }
}

/// Ordered event log plus the highest severity seen so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Status {
    level: StatusLevel,
    events: Vec<StatusEvent>,
}

impl Status {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a status holding exactly one event.
    pub fn with_event(level: StatusLevel, code: StatusCode, message: impl Into<String>) -> Self {
        let mut status = Self::new();
        status.add(level, code, message);
        status
    }

    pub fn add(&mut self, level: StatusLevel, code: StatusCode, message: impl Into<String>) {
        self.push(StatusEvent::new(level, code, message));
    }

    pub fn push(&mut self, event: StatusEvent) {
        self.level = self.level.max(event.level);
        self.events.push(event);
    }

    /// Raise the level to `other`'s level. Events are not copied.
    pub fn merge(&mut self, other: &Status) {
        self.level = self.level.max(other.level);
    }

    /// Raise the level and append all of `other`'s events.
    pub fn absorb(&mut self, other: &Status) {
        self.merge(other);
        self.events.extend(other.events.iter().cloned());
    }

    pub fn level(&self) -> StatusLevel {
        self.level
    }

    pub fn events(&self) -> &[StatusEvent] {
        &self.events
    }

    pub fn is_ok(&self) -> bool {
        self.level == StatusLevel::Ok
    }

    /// Whether any event carries `code`.
    pub fn has_code(&self, code: StatusCode) -> bool {
        self.events.iter().any(|event| event.code == code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        for event in &self.events {
            write!(f, "\n  {event}")?;
        }
        Ok(())
    }
}
