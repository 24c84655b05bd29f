//! How serious an indentation problem is.
//!
//! The same misplaced line can be reported at either level. Which one
//! depends on the pass that found it, not on the line itself.

use std::fmt;

/// Severity of an outline diagnostic.
///
/// - [`validate`](fn@crate::validate) reports `Error`: the outline is rejected.
/// - [`parse_with_diagnostics`](crate::parse_with_diagnostics) reports
///   `Warning`: the line is re-levelled and kept.
///
/// Only `Error` makes a [`DiagnosticCollector`](super::DiagnosticCollector)
/// fail on finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Returns `true` if the outline is rejected.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if the outline was repaired and kept.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }

    /// Lowercase label used as the diagnostic prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
