//! Text output for diagnostics.

use crate::diagnostic::Diagnostic;
use std::fmt::Write;

/// Turns diagnostics into text.
pub trait DiagnosticRenderer {
    /// Renders one diagnostic, including its trailing newline.
    fn render(&self, diag: &Diagnostic) -> String;

    /// Renders every diagnostic, one after the other.
    fn render_all(&self, diags: &[Diagnostic]) -> String {
        diags.iter().map(|d| self.render(d)).collect()
    }
}

/// Compiler-style terminal output:
///
/// ```text
/// warning[W301]: route is too small, potential collisions
///   --> at 20,-10
///    = t1 = r270 20,-10
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalRenderer {
    /// Color the severity label with ANSI escapes.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let severity = diag.severity();
        let mut out = if self.color {
            format!("\x1b[1;{}m{severity}\x1b[0m", severity.ansi_color())
        } else {
            severity.to_string()
        };
        // Writing into a String cannot fail.
        let _ = writeln!(out, "[{}]: {}", diag.code, diag.message);
        if let Some(location) = diag.location {
            let _ = writeln!(out, "  --> at {location}");
        }
        for note in &diag.notes {
            let _ = writeln!(out, "   = {note}");
        }
        out
    }
}
