//! A single reported condition, optionally pinned to a grid point.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use mroute_common::Point;
use serde::{Deserialize, Serialize};

/// One diagnostic: a code, a message, where it happened, and the router
/// state needed to reproduce it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What happened.
    pub code: DiagnosticCode,
    /// One-line description.
    pub message: String,
    /// Grid point the condition was detected at.
    pub location: Option<Point>,
    /// Router state at the time, one item per entry.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a diagnostic without location or notes.
    pub fn new(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            notes: Vec::new(),
        }
    }

    /// Severity, as fixed by the code.
    pub fn severity(&self) -> Severity {
        self.code.severity
    }

    /// Pins the diagnostic to a grid point.
    pub fn at(mut self, location: Point) -> Self {
        self.location = Some(location);
        self
    }

    /// Appends a note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
