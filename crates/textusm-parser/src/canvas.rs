//! Hypothesis canvas extraction from markdown.
//!
//! Canvas content usually arrives as a markdown document with one `##`
//! heading per section followed by bullet items. The extractor maps each
//! heading to a [`CanvasSection`] and collects the lines beneath it.

use indexmap::{IndexMap, IndexSet};
use log::debug;
use winnow::{
    Parser as _,
    combinator::{alt, preceded},
    error::ModalResult,
    token::{one_of, rest, take_while},
};

use textusm_core::{
    canvas::CanvasSection,
    outline::{Outline, OutlineNode},
};

use crate::lexer;

/// Items of every canvas section, in canonical section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypothesisCanvas {
    sections: IndexMap<CanvasSection, IndexSet<String>>,
}

impl HypothesisCanvas {
    /// Create a canvas with every section present and empty.
    pub fn new() -> Self {
        Self {
            sections: CanvasSection::ALL
                .into_iter()
                .map(|section| (section, IndexSet::new()))
                .collect(),
        }
    }

    /// Append an item to a section.
    ///
    /// Returns `false` if the section already holds the same item.
    pub fn push(&mut self, section: CanvasSection, item: impl Into<String>) -> bool {
        self.sections.entry(section).or_default().insert(item.into())
    }

    /// Items of `section` in first-seen order.
    pub fn items(&self, section: CanvasSection) -> impl Iterator<Item = &str> {
        self.sections
            .get(&section)
            .into_iter()
            .flat_map(|items| items.iter().map(String::as_str))
    }

    /// Sections with their items, in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = (CanvasSection, &IndexSet<String>)> {
        self.sections.iter().map(|(section, items)| (*section, items))
    }

    /// Returns `true` if no section has any item.
    pub fn is_empty(&self) -> bool {
        self.sections.values().all(IndexSet::is_empty)
    }

    /// Render the canvas as an outline: one root per section, items as its
    /// children.
    pub fn to_outline(&self) -> Outline {
        self.sections()
            .map(|(section, items)| {
                items.iter().fold(
                    OutlineNode::new(section.to_string(), 0),
                    |node, item| node.with_child(OutlineNode::new(item.as_str(), 1)),
                )
            })
            .collect::<Vec<_>>()
            .into()
    }
}

impl Default for HypothesisCanvas {
    fn default() -> Self {
        Self::new()
    }
}

/// `## Title` or `### Title` with a non-empty title.
fn heading<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    preceded(
        (alt(("###", "##")), take_while(1.., |c: char| c.is_whitespace())),
        rest,
    )
    .map(str::trim)
    .verify(|title: &str| !title.is_empty())
    .parse_next(input)
}

/// `- item` or `* item` starting at column zero.
fn bullet<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    preceded(
        (one_of(['-', '*']), take_while(1.., |c: char| c.is_whitespace())),
        rest,
    )
    .map(str::trim)
    .parse_next(input)
}

/// Extract hypothesis canvas items from a markdown document.
///
/// - A line starting with ```` ``` ```` toggles a code block; code block
///   content is ignored.
/// - A `##`/`###` heading selects the first section whose title it
///   contains. Any other heading is skipped and the current section stays
///   selected.
/// - Bullet items and other non-heading lines are added, trimmed, to the
///   current section.
/// - Duplicate items within a section are dropped.
///
/// # Examples
///
/// ```
/// # use textusm_core::canvas::CanvasSection;
/// # use textusm_parser::extract_canvas;
/// let markdown = "## 🎯 目的\n- Reduce churn\n- Reduce churn\n## ビジョン\nEveryone ships";
/// let canvas = extract_canvas(markdown);
///
/// assert_eq!(canvas.items(CanvasSection::Purpose).collect::<Vec<_>>(), ["Reduce churn"]);
/// assert_eq!(canvas.items(CanvasSection::Vision).collect::<Vec<_>>(), ["Everyone ships"]);
/// ```
pub fn extract_canvas(markdown: &str) -> HypothesisCanvas {
    let mut canvas = HypothesisCanvas::new();
    let mut current: Option<CanvasSection> = None;
    let mut in_code_block = false;

    for line in lexer::lines(markdown) {
        let raw = line.raw().trim_end_matches('\r');

        if line.text().starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            continue;
        }

        if let Ok(title) = heading.parse(raw) {
            let matched = CanvasSection::from_heading(title);
            debug!(heading = title, section:? = matched; "Canvas heading");
            if let Some(section) = matched {
                current = Some(section);
            }
            continue;
        }

        let Some(section) = current else {
            continue;
        };

        if let Ok(item) = bullet.parse(raw) {
            if !item.is_empty() {
                canvas.push(section, item);
            }
            continue;
        }

        if !line.is_blank() && !raw.starts_with('#') {
            canvas.push(section, line.text());
        }
    }

    canvas
}
