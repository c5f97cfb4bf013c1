//! Structured routing diagnostics and their text rendering.
//!
//! Routing never prints. Conditions worth reporting that are not errors (a
//! route squeezed into a region without clearance, a bundle trunk pushed out
//! past its requested base) are emitted as structured [`Diagnostic`]s into the
//! thread-safe [`DiagnosticSink`] the caller passes in. [`TerminalRenderer`]
//! formats them for humans.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::DiagnosticCode;
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
