//! Outline formatter for pasted markdown.
//!
//! Text copied out of a chat answer or a markdown document usually wraps the
//! outline in a fenced code block. The formatter keeps only the lines inside
//! such blocks and drops everything else.
//!
//! Lines are emitted trimmed, at depth zero. Hierarchy is not reconstructed
//! from headings or list nesting.

use log::{debug, warn};

use crate::lexer;

const FENCE: &str = "```";

/// Options for [`format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    fence_language: String,
}

impl FormatOptions {
    /// Create options recognizing blocks opened with ```` ```{fence_language} ````.
    pub fn new(fence_language: impl Into<String>) -> Self {
        Self {
            fence_language: fence_language.into(),
        }
    }

    pub fn fence_language(&self) -> &str {
        &self.fence_language
    }

    fn opening_fence(&self) -> String {
        format!("{FENCE}{}", self.fence_language)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new("markdown")
    }
}

/// Extract fenced outline content from `source`.
///
/// - A line whose trimmed form starts with the opening fence opens a block.
/// - A line trimmed to exactly ```` ``` ```` closes it.
/// - Fence lines are never emitted.
/// - Inside a block, blank lines are kept as empty lines and other lines
///   are emitted trimmed.
/// - Outside a block, lines are dropped, so text without any fence formats
///   to the empty string.
///
/// # Examples
///
/// ```
/// # use textusm_parser::{FormatOptions, format};
/// let source = "Here you go:\n```markdown\n  Home\n    About\n\nBlog\n```\nEnjoy!";
///
/// assert_eq!(format(source, &FormatOptions::default()), "Home\nAbout\n\nBlog");
/// ```
pub fn format(source: &str, options: &FormatOptions) -> String {
    if source.trim().is_empty() {
        return String::new();
    }

    let opening = options.opening_fence();
    let mut formatted: Vec<&str> = Vec::new();
    let mut inside = false;
    let mut blocks = 0usize;

    for line in lexer::lines(source) {
        let trimmed = line.text();

        if trimmed.starts_with(&opening) {
            inside = true;
            blocks += 1;
            continue;
        } else if trimmed == FENCE {
            inside = false;
            continue;
        }

        if inside {
            formatted.push(trimmed);
        }
    }

    if blocks == 0 {
        warn!(fence = opening.as_str(); "No fenced outline block found; formatted output is empty");
    } else {
        debug!(blocks, lines = formatted.len(); "Formatted fenced outline");
    }

    formatted.join("\n")
}
