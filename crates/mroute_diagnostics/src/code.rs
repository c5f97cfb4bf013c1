//! Stable identifiers for the conditions the router reports.

use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A diagnostic code such as `W301`: the severity letter followed by a
/// three-digit number.
///
/// The severity is part of the code, so every occurrence of a condition is
/// reported at the same level.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// Level every diagnostic with this code is reported at.
    pub severity: Severity,
    /// Number within the severity.
    pub number: u16,
}

impl DiagnosticCode {
    /// A route had to turn inside a region that leaves no room for the bend.
    pub const TIGHT_ROUTE: DiagnosticCode = DiagnosticCode::new(Severity::Warning, 301);
    /// A bundle trunk was moved ahead of its requested base point.
    pub const TRUNK_MOVED: DiagnosticCode = DiagnosticCode::new(Severity::Note, 302);

    /// Creates a code.
    pub const fn new(severity: Severity, number: u16) -> Self {
        Self { severity, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.severity.prefix(), self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(DiagnosticCode::TIGHT_ROUTE.to_string(), "W301");
        assert_eq!(DiagnosticCode::TRUNK_MOVED.to_string(), "N302");
    }

    #[test]
    fn pads_to_three_digits() {
        assert_eq!(DiagnosticCode::new(Severity::Error, 7).to_string(), "E007");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&DiagnosticCode::TIGHT_ROUTE).unwrap();
        let back: DiagnosticCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DiagnosticCode::TIGHT_ROUTE);
    }
}
