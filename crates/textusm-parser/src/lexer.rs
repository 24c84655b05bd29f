//! Line lexer for outline source text.
//!
//! The outline grammar is line oriented, so instead of a token stream the
//! lexer produces one [`Line`] per `'\n'`-separated line. Each line is split
//! into its leading whitespace run and the content after it, with byte
//! spans kept for diagnostics.
//!
//! Splitting follows `str::split('\n')`: the empty input is one blank line,
//! and a trailing newline yields a final blank line.

use log::warn;
use winnow::{
    Parser as _,
    combinator::opt,
    error::ModalResult,
    stream::{LocatingSlice, Location},
    token::{take_till, take_while},
};

use crate::span::Span;

type Input<'a> = LocatingSlice<&'a str>;

/// One line of outline source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Line<'a> {
    number: usize,
    span: Span,
    raw: &'a str,
    indent: &'a str,
    content: &'a str,
}

impl<'a> Line<'a> {
    /// 1-based line number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Span of the whole line, excluding the line break.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Span of the leading whitespace run.
    ///
    /// Widened to the first character of content when the line is not
    /// indented, so labels on it remain visible.
    pub fn indent_span(&self) -> Span {
        let start = self.span.start();
        let end = if self.indent.is_empty() {
            start + self.content.chars().next().map_or(0, char::len_utf8)
        } else {
            start + self.indent.len()
        };
        Span::new(start..end)
    }

    /// The line exactly as written, including any trailing `'\r'`.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The leading whitespace run.
    pub fn indent(&self) -> &'a str {
        self.indent
    }

    /// Number of characters in the leading whitespace run.
    pub fn indent_width(&self) -> usize {
        self.indent.chars().count()
    }

    /// The content with surrounding whitespace removed.
    pub fn text(&self) -> &'a str {
        self.content.trim()
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_empty()
    }
}

/// Whitespace that counts towards indentation.
fn is_indent(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

/// Lex a single line and report whether it was terminated by a newline.
fn line<'a>(input: &mut Input<'a>) -> ModalResult<(Line<'a>, bool)> {
    let start = input.current_token_start();

    let ((indent, content), raw) = (take_while(0.., is_indent), take_till(0.., '\n'))
        .with_taken()
        .parse_next(input)?;

    let end = input.current_token_start();
    let terminated = opt('\n').parse_next(input)?.is_some();

    let line = Line {
        number: 0,
        span: Span::new(start..end),
        raw,
        indent,
        content,
    };
    Ok((line, terminated))
}

/// Split source text into numbered lines.
pub(crate) fn lines(source: &str) -> Vec<Line<'_>> {
    let mut input = LocatingSlice::new(source);
    let mut lines = Vec::new();

    loop {
        match line(&mut input) {
            Ok((mut next, terminated)) => {
                next.number = lines.len() + 1;
                lines.push(next);
                if !terminated {
                    break;
                }
            }
            Err(err) => {
                warn!(err:?, line = lines.len() + 1; "Line lexer stopped early");
                break;
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_is_one_blank_line() {
        let lines = lines("");

        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_blank());
        assert_eq!(lines[0].span(), Span::new(0..0));
    }

    #[test]
    fn test_trailing_newline_yields_blank_line() {
        let lines = lines("Root\n");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "Root");
        assert!(lines[1].is_blank());
    }

    #[test]
    fn test_line_numbers_and_spans() {
        let source = "Root\n  Child\n    Grandchild";
        let lines = lines(source);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].number(), 2);
        assert_eq!(lines[1].span(), Span::new(5..12));
        assert_eq!(&source[5..12], "  Child");
        assert_eq!(lines[2].indent_width(), 4);
        assert_eq!(lines[2].text(), "Grandchild");
    }

    #[test]
    fn test_indent_span() {
        let lines = lines("Root\n   Child");

        assert_eq!(lines[0].indent_span(), Span::new(0..1));
        assert_eq!(lines[1].indent_span(), Span::new(5..8));
    }

    #[test]
    fn test_tabs_count_as_one_character() {
        let lines = lines("\t\tItem");

        assert_eq!(lines[0].indent(), "\t\t");
        assert_eq!(lines[0].indent_width(), 2);
    }

    #[test]
    fn test_carriage_return_is_trimmed() {
        let lines = lines("Root\r\n  Child\r\n");

        assert_eq!(lines[0].text(), "Root");
        assert_eq!(lines[0].raw(), "Root\r");
        assert_eq!(lines[1].text(), "Child");
        assert_eq!(lines[1].indent_width(), 2);
    }

    #[test]
    fn test_whitespace_only_line_is_blank() {
        let lines = lines("   \n\t");

        assert!(lines.iter().all(Line::is_blank));
    }

    #[test]
    fn test_multibyte_content() {
        let lines = lines("🎯 目的\n    われわれ");

        assert_eq!(lines[0].text(), "🎯 目的");
        assert_eq!(lines[1].indent_width(), 4);
        assert_eq!(lines[1].text(), "われわれ");
    }
}
