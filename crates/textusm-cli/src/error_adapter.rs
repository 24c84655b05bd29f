//! Error adapter for converting TextUsmError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! When a [`textusm_parser::error::ParseError`] contains multiple diagnostics,
//! each diagnostic is rendered independently. Warnings from the lenient parser
//! go through the same [`DiagnosticAdapter`].

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan, Severity as MietteSeverity,
    SourceSpan,
};

use textusm::TextUsmError;
use textusm_parser::error::{Diagnostic, Severity};

/// Adapter for a single outline diagnostic.
///
/// This adapter wraps a single [`Diagnostic`] and implements
/// [`MietteDiagnostic`] to enable rich error formatting in the CLI.
pub struct DiagnosticAdapter<'a> {
    /// The wrapped diagnostic
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for non-diagnostic [`TextUsmError`] variants.
///
/// This adapter handles errors that don't carry source locations, such as
/// I/O errors, configuration errors and unknown diagram types.
pub struct ErrorAdapter<'a>(pub &'a TextUsmError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            TextUsmError::Io(_) => "textusm::io",
            TextUsmError::Parse { .. } => return None,
            TextUsmError::Config(_) => "textusm::config",
            TextUsmError::UnknownDiagram(_) => "textusm::diagram",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            TextUsmError::UnknownDiagram(_) => Some(Box::new(
                "run `textusm diagrams` to list the known diagram types",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a single diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`Span`](textusm_parser::Span) to a miette [`SourceSpan`].
fn span_to_miette(span: textusm_parser::Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`TextUsmError`] into a list of reportable errors.
///
/// For [`TextUsmError::Parse`], this returns one [`Reportable`] for
/// each diagnostic in the error. For other error variants, this returns a
/// single [`Reportable`].
pub fn to_reportables(err: &TextUsmError) -> Vec<Reportable<'_>> {
    match err {
        TextUsmError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render a diagnostic with miette's graphical handler.
///
/// Falls back to the plain message if rendering fails.
pub fn render(diagnostic: &dyn MietteDiagnostic) -> String {
    let mut writer = String::new();
    match GraphicalReportHandler::new().render_report(&mut writer, diagnostic) {
        Ok(()) => writer,
        Err(_) => diagnostic.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use textusm::diagram::UnknownDiagramType;
    use textusm_parser::{
        Span,
        error::{ErrorCode, ParseError},
    };

    use super::*;

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("first line must not be indented")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(0..2), "indented by 2 characters")
            .with_help("remove the leading whitespace");
        let parse_err = ParseError::from(diag);
        let err = TextUsmError::new_parse_error(parse_err, "  Root");

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "first line must not be indented");
                assert_eq!(d.code().unwrap().to_string(), "E101");
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_multiple_diagnostics() {
        let diags = vec![
            Diagnostic::error("first line must not be indented")
                .with_code(ErrorCode::E101)
                .with_label(Span::new(0..2), "first"),
            Diagnostic::error("indentation is not a multiple of 2 spaces")
                .with_code(ErrorCode::E100)
                .with_label(Span::new(7..10), "second")
                .with_help("help for second"),
            Diagnostic::error("mixed indentation").with_label(Span::new(15..16), "third"),
        ];
        let parse_err = ParseError::from(diags);
        let err = TextUsmError::new_parse_error(parse_err, "  Root\n   Odd\n\tTab");

        let reportables = to_reportables(&err);

        // Each diagnostic is separate
        assert_eq!(reportables.len(), 3);
        assert_eq!(reportables[0].to_string(), "first line must not be indented");
        assert_eq!(
            reportables[1].to_string(),
            "indentation is not a multiple of 2 spaces"
        );
        assert_eq!(reportables[2].to_string(), "mixed indentation");
    }

    #[test]
    fn test_non_parse_error() {
        let err = TextUsmError::Config("bad width".to_string());

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad width");
                assert_eq!(e.code().unwrap().to_string(), "textusm::config");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_unknown_diagram_has_help() {
        let err = TextUsmError::from(UnknownDiagramType("flowchart".to_string()));
        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].to_string(), "unknown diagram type `flowchart`");
        assert!(reportables[0].help().is_some());
    }

    #[test]
    fn test_all_labels_returned() {
        let diag = Diagnostic::error("indentation increases by more than one level")
            .with_label(Span::new(5..11), "primary label")
            .with_secondary_label(Span::new(0..4), "secondary label");

        let adapter = DiagnosticAdapter::new(&diag, "Root\n      Child");

        let labels: Vec<_> = adapter.labels().unwrap().collect();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].label(), Some("primary label"));
        assert!(labels[0].primary());
        assert_eq!(labels[1].label(), Some("secondary label"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::warning("indentation increases by more than one level");
        let adapter = DiagnosticAdapter::new(&diag, "Root\n      Child");

        assert_eq!(adapter.severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_render_includes_message_and_code() {
        let diag = Diagnostic::error("first line must not be indented")
            .with_code(ErrorCode::E101)
            .with_label(Span::new(0..2), "indented by 2 characters");
        let adapter = DiagnosticAdapter::new(&diag, "  Root");

        let rendered = render(&adapter);

        assert!(rendered.contains("first line must not be indented"));
        assert!(rendered.contains("E101"));
    }
}
