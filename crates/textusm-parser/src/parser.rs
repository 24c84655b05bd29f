//! Lenient outline parser.
//!
//! Builds an [`Outline`] from any input. Indentation is converted to a level
//! with `indent / unit.width()`, and a line is attached to the closest open
//! ancestor whose level is lower than its own. Because a node's depth is the
//! number of open ancestors, an indentation jump of several levels is
//! clamped to one.
//!
//! The parser never rejects input. Lines whose indentation would fail
//! strict validation are reported as warnings by [`parse_with_diagnostics`].

use log::{debug, trace};

use textusm_core::{
    indent::IndentUnit,
    outline::{Outline, OutlineNode},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, Severity},
    lexer::{self, Line},
    validate::IndentIssue,
};

/// Incremental forest builder over a stack of open ancestors.
#[derive(Debug, Default)]
struct TreeBuilder {
    /// Open nodes with the indentation level they were opened at.
    stack: Vec<(usize, OutlineNode)>,
    roots: Vec<OutlineNode>,
}

impl TreeBuilder {
    fn push(&mut self, level: usize, text: &str) {
        while self.stack.last().is_some_and(|(open, _)| *open >= level) {
            self.close();
        }

        let depth = self.stack.len();
        self.stack.push((level, OutlineNode::new(text, depth)));
    }

    /// Attach the innermost open node to its parent, or to the roots.
    fn close(&mut self) {
        let Some((_, node)) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some((_, parent)) => parent.push_child(node),
            None => self.roots.push(node),
        }
    }

    fn finish(mut self) -> Outline {
        while !self.stack.is_empty() {
            self.close();
        }
        Outline::new(self.roots)
    }
}

fn build(source: &str, unit: IndentUnit, mut warnings: Option<&mut DiagnosticCollector>) -> Outline {
    let lines = lexer::lines(source);
    let mut builder = TreeBuilder::default();
    let mut previous: Option<&Line<'_>> = None;

    for line in lines.iter().filter(|line| !line.is_blank()) {
        if let Some(collector) = warnings.as_deref_mut() {
            if let Some(issue) = IndentIssue::check(line, previous, unit) {
                trace!(line = line.number(), code = issue.code().as_str(); "Repaired indentation");
                collector.emit(issue.to_diagnostic(line, unit, Severity::Warning));
            }
        }

        builder.push(line.indent_width() / unit.width(), line.text());
        previous = Some(line);
    }

    let outline = builder.finish();
    debug!(lines = lines.len(), roots = outline.roots().len(); "Outline parsed");
    outline
}

/// Parse indented text into an outline.
///
/// Blank lines are ignored. Siblings keep their source order.
///
/// # Examples
///
/// ```
/// # use textusm_core::indent::IndentUnit;
/// # use textusm_parser::parse;
/// let outline = parse("Home\n  About\n  Contact\nBlog", IndentUnit::TWO_SPACES);
///
/// assert_eq!(outline.roots().len(), 2);
/// assert_eq!(outline.roots()[0].children().len(), 2);
/// ```
pub fn parse(source: &str, unit: IndentUnit) -> Outline {
    build(source, unit, None)
}

/// Parse indented text and report every line whose indentation was repaired.
///
/// The returned diagnostics all have [`Severity::Warning`].
pub fn parse_with_diagnostics(source: &str, unit: IndentUnit) -> (Outline, Vec<Diagnostic>) {
    let mut collector = DiagnosticCollector::new();
    let outline = build(source, unit, Some(&mut collector));
    (outline, collector.into_diagnostics())
}
