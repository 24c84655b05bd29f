//! Rejection of an outline by strict validation.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// An outline that failed [`validate`](fn@crate::validate).
///
/// Holds one diagnostic per offending line, in line order. A blank document
/// holds a single `E001` diagnostic instead.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Every diagnostic, in line order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error codes of the diagnostics, in line order.
    pub fn codes(&self) -> impl Iterator<Item = ErrorCode> + '_ {
        self.diagnostics.iter().filter_map(Diagnostic::code)
    }
}

/// Shows the first offending line; the rest are summarized as a count.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.diagnostics.split_first() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        if !rest.is_empty() {
            write!(f, " (+{} more)", rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use textusm_core::indent::IndentUnit;

    use super::*;
    use crate::validate;

    #[test]
    fn test_blank_document() {
        let err = validate("  \n\n", IndentUnit::TWO_SPACES).unwrap_err();

        assert_eq!(err.codes().collect::<Vec<_>>(), [ErrorCode::E001]);
        assert!(err.to_string().starts_with("error[E001]"));
    }

    #[test]
    fn test_one_diagnostic_per_offending_line() {
        let err = validate("Root\n   Odd\n\tTab\nFine", IndentUnit::TWO_SPACES).unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.codes().collect::<Vec<_>>(), [ErrorCode::E100, ErrorCode::E103]);
    }

    #[test]
    fn test_display_counts_remaining_lines() {
        let err: ParseError = vec![
            Diagnostic::error("line 2 is misaligned").with_code(ErrorCode::E100),
            Diagnostic::error("line 5 jumps two levels").with_code(ErrorCode::E102),
            Diagnostic::error("line 9 mixes tabs and spaces").with_code(ErrorCode::E103),
        ]
        .into();

        assert_eq!(err.to_string(), "error[E100]: line 2 is misaligned (+2 more)");
    }

    #[test]
    fn test_display_single_line() {
        let err: ParseError = Diagnostic::error("first line is indented")
            .with_code(ErrorCode::E101)
            .into();

        assert_eq!(err.to_string(), "error[E101]: first line is indented");
    }

    #[test]
    fn test_codes_skip_uncoded_diagnostics() {
        let err: ParseError = vec![
            Diagnostic::error("uncoded"),
            Diagnostic::error("jump").with_code(ErrorCode::E102),
        ]
        .into();

        assert_eq!(err.codes().collect::<Vec<_>>(), [ErrorCode::E102]);
    }
}
