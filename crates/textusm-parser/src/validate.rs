//! Strict indentation validation.
//!
//! An outline is well formed when:
//! - it contains at least one non-blank line,
//! - every indentation run is made only of the unit's character,
//! - every indentation run is a whole number of units,
//! - the first non-blank line is not indented,
//! - each line is nested at most one level deeper than the line above.
//!
//! Dedenting by any amount is always allowed. Blank lines are skipped.

use log::debug;

use textusm_core::indent::IndentUnit;

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError, Severity},
    lexer::{self, Line},
    span::Span,
};

/// A single indentation rule violation on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndentIssue {
    Mixed { found: char },
    Misaligned,
    IndentedFirstLine,
    Jump { previous: Span, levels: usize },
}

impl IndentIssue {
    /// Check `line` against the line before it.
    ///
    /// `previous` is the closest preceding non-blank line, `None` for the
    /// first one.
    pub(crate) fn check(line: &Line<'_>, previous: Option<&Line<'_>>, unit: IndentUnit) -> Option<Self> {
        // Any foreign indent character is mixed, even a tab-only run whose
        // character count would align with a spaces unit.
        if let Some(found) = line.indent().chars().find(|c| *c != unit.indent_char()) {
            return Some(Self::Mixed { found });
        }

        let indent = line.indent_width();
        if indent % unit.width() != 0 {
            return Some(Self::Misaligned);
        }

        match previous {
            None if indent != 0 => Some(Self::IndentedFirstLine),
            Some(previous) => {
                let previous_indent = previous.indent_width();
                (indent > previous_indent && indent - previous_indent != unit.width()).then(|| {
                    Self::Jump {
                        previous: previous.span(),
                        levels: (indent - previous_indent) / unit.width(),
                    }
                })
            }
            None => None,
        }
    }

    pub(crate) fn code(self) -> ErrorCode {
        match self {
            Self::Mixed { .. } => ErrorCode::E103,
            Self::Misaligned => ErrorCode::E100,
            Self::IndentedFirstLine => ErrorCode::E101,
            Self::Jump { .. } => ErrorCode::E102,
        }
    }

    /// Build the diagnostic reported for this issue on `line`.
    pub(crate) fn to_diagnostic(
        self,
        line: &Line<'_>,
        unit: IndentUnit,
        severity: Severity,
    ) -> Diagnostic {
        let width = line.indent_width();
        let diag = match self {
            Self::Mixed { found } => Diagnostic::new(severity, "mixed indentation")
                .with_label(line.indent_span(), format!("found {}", describe_char(found)))
                .with_help(format!("indent using only {}", describe_unit(unit))),
            Self::Misaligned => Diagnostic::new(
                severity,
                format!("indentation is not a multiple of {}", describe_unit(unit)),
            )
            .with_label(line.indent_span(), format!("{width} characters of indentation"))
            .with_help(format!("indent each level with exactly {}", describe_unit(unit))),
            Self::IndentedFirstLine => Diagnostic::new(severity, "first line must not be indented")
                .with_label(line.indent_span(), format!("indented by {width} characters"))
                .with_help("remove the leading whitespace"),
            Self::Jump { previous, levels } => {
                Diagnostic::new(severity, "indentation increases by more than one level")
                    .with_label(line.indent_span(), format!("indented {levels} levels deeper"))
                    .with_secondary_label(previous, "relative to this line")
                    .with_help(format!(
                        "indent by exactly {} relative to the line above",
                        describe_unit(unit)
                    ))
            }
        };
        diag.with_code(self.code())
    }
}

fn describe_unit(unit: IndentUnit) -> String {
    match unit {
        IndentUnit::Tab => "one tab".to_string(),
        IndentUnit::Spaces(_) => unit.to_string(),
    }
}

fn describe_char(c: char) -> String {
    match c {
        '\t' => "a tab".to_string(),
        ' ' => "a space".to_string(),
        other => format!("U+{:04X}", other as u32),
    }
}

/// Returns `true` if `source` is a well-formed outline.
///
/// Stops at the first violation. Use [`validate`] to collect every
/// violation with its location.
///
/// # Examples
///
/// ```
/// # use textusm_core::indent::IndentUnit;
/// # use textusm_parser::is_valid;
/// let unit = IndentUnit::TWO_SPACES;
///
/// assert!(is_valid("Root\n  Child\nRoot2", unit));
/// assert!(!is_valid("Root\n    Child", unit));
/// assert!(!is_valid("   \n  \n", unit));
/// ```
pub fn is_valid(source: &str, unit: IndentUnit) -> bool {
    if source.trim().is_empty() {
        return false;
    }

    let lines = lexer::lines(source);
    let mut previous = None;
    for line in lines.iter().filter(|line| !line.is_blank()) {
        if IndentIssue::check(line, previous, unit).is_some() {
            return false;
        }
        previous = Some(line);
    }

    true
}

/// Validate `source`, reporting every offending line.
///
/// The indentation tracker advances past offending lines too, so each bad
/// line produces exactly one diagnostic.
///
/// # Errors
///
/// Returns a [`ParseError`] holding one [`Diagnostic`] per violation, or a
/// single `E001` diagnostic when the document is empty.
pub fn validate(source: &str, unit: IndentUnit) -> Result<(), ParseError> {
    if source.trim().is_empty() {
        return Err(Diagnostic::error("document is empty")
            .with_code(ErrorCode::E001)
            .with_label(Span::new(0..source.len()), ErrorCode::E001.description())
            .with_help("add at least one line of text")
            .into());
    }

    let lines = lexer::lines(source);
    let mut collector = DiagnosticCollector::new();
    let mut previous = None;

    for line in lines.iter().filter(|line| !line.is_blank()) {
        if let Some(issue) = IndentIssue::check(line, previous, unit) {
            debug!(line = line.number(), code = issue.code().as_str(); "Invalid indentation");
            collector.emit(issue.to_diagnostic(line, unit, Severity::Error));
        }
        previous = Some(line);
    }

    collector.finish()
}
