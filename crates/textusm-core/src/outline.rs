//! Outline forest types.
//!
//! An [`Outline`] is the tree structure recovered from indented text: an
//! ordered list of root [`OutlineNode`]s, each owning its children. The
//! forest is built fresh from every text snapshot and has no shared
//! ownership or back-references.

use std::slice;

use crate::indent::IndentUnit;

/// A single labeled node of an outline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutlineNode {
    text: String,
    depth: usize,
    children: Vec<OutlineNode>,
}

impl OutlineNode {
    /// Creates a leaf node at the given depth.
    ///
    /// The caller is responsible for keeping `depth` consistent with the
    /// node's position once it is attached to a parent.
    pub fn new(text: impl Into<String>, depth: usize) -> Self {
        Self {
            text: text.into(),
            depth,
            children: Vec::new(),
        }
    }

    /// Adds a child after the existing children and returns `self`.
    pub fn with_child(mut self, child: OutlineNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child after the existing children.
    pub fn push_child(&mut self, child: OutlineNode) {
        self.children.push(child);
    }

    /// The trimmed line content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Nesting level, zero for roots.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Children in source order.
    pub fn children(&self) -> &[OutlineNode] {
        &self.children
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// A forest of [`OutlineNode`]s in source order.
///
/// # Examples
///
/// ```
/// # use textusm_core::{indent::IndentUnit, outline::{Outline, OutlineNode}};
/// let outline = Outline::new(vec![
///     OutlineNode::new("Home", 0)
///         .with_child(OutlineNode::new("About", 1))
///         .with_child(OutlineNode::new("Contact", 1)),
/// ]);
///
/// assert_eq!(outline.len(), 3);
/// assert_eq!(outline.max_depth(), Some(1));
/// assert_eq!(
///     outline.to_text(IndentUnit::TWO_SPACES),
///     "Home\n  About\n  Contact"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Outline {
    roots: Vec<OutlineNode>,
}

impl Outline {
    /// Creates an outline from its root nodes.
    pub fn new(roots: Vec<OutlineNode>) -> Self {
        Self { roots }
    }

    /// Root nodes in source order.
    pub fn roots(&self) -> &[OutlineNode] {
        &self.roots
    }

    /// Consumes the outline and returns its root nodes.
    pub fn into_roots(self) -> Vec<OutlineNode> {
        self.roots
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if the outline has no nodes.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Deepest nesting level present, or `None` for an empty outline.
    pub fn max_depth(&self) -> Option<usize> {
        self.walk().map(|(depth, _)| depth).max()
    }

    /// Pre-order iterator over every node.
    pub fn iter(&self) -> impl Iterator<Item = &OutlineNode> {
        self.walk().map(|(_, node)| node)
    }

    /// Pre-order iterator yielding each node with its structural depth.
    ///
    /// The depth is derived from the node's position in the forest rather
    /// than from [`OutlineNode::depth`].
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![self.roots.iter()],
        }
    }

    /// Serializes the outline back to indented text.
    ///
    /// Every node becomes one line made of `depth` units of indentation
    /// followed by its text. Lines are joined with `'\n'` and no trailing
    /// newline is written.
    pub fn to_text(&self, unit: IndentUnit) -> String {
        self.walk()
            .map(|(depth, node)| format!("{}{}", unit.render(depth), node.text()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<OutlineNode>> for Outline {
    fn from(roots: Vec<OutlineNode>) -> Self {
        Self::new(roots)
    }
}

/// Pre-order traversal over an [`Outline`], see [`Outline::walk`].
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<slice::Iter<'a, OutlineNode>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a OutlineNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                Some(node) => {
                    let depth = self.stack.len() - 1;
                    self.stack.push(node.children.iter());
                    return Some((depth, node));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample() -> Outline {
        Outline::new(vec![
            OutlineNode::new("Column1", 0)
                .with_child(OutlineNode::new("Column2", 1))
                .with_child(OutlineNode::new("Column3", 1)),
            OutlineNode::new("Row1", 0)
                .with_child(OutlineNode::new("Column1", 1).with_child(OutlineNode::new("Cell", 2))),
        ])
    }

    #[test]
    fn test_empty_outline() {
        let outline = Outline::default();

        assert!(outline.is_empty());
        assert_eq!(outline.len(), 0);
        assert_eq!(outline.max_depth(), None);
        assert_eq!(outline.to_text(IndentUnit::default()), "");
    }

    #[test]
    fn test_preorder_iteration() {
        let outline = sample();
        let texts: Vec<_> = outline.iter().map(OutlineNode::text).collect();

        assert_eq!(texts, ["Column1", "Column2", "Column3", "Row1", "Column1", "Cell"]);
    }

    #[test]
    fn test_walk_depths() {
        let depths: Vec<_> = sample().walk().map(|(depth, _)| depth).collect();

        assert_eq!(depths, [0, 1, 1, 0, 1, 2]);
    }

    #[test]
    fn test_max_depth_and_len() {
        let outline = sample();

        assert_eq!(outline.len(), 6);
        assert_eq!(outline.max_depth(), Some(2));
    }

    #[test]
    fn test_to_text_with_tabs() {
        assert_eq!(
            sample().to_text(IndentUnit::Tab),
            "Column1\n\tColumn2\n\tColumn3\nRow1\n\tColumn1\n\t\tCell"
        );
    }

    #[test]
    fn test_to_text_uses_structural_depth() {
        let outline = Outline::new(vec![
            OutlineNode::new("Root", 0).with_child(OutlineNode::new("Child", 7)),
        ]);

        assert_eq!(outline.to_text(IndentUnit::TWO_SPACES), "Root\n  Child");
    }

    fn node_strategy() -> impl Strategy<Value = OutlineNode> {
        let leaf = "[a-z]{1,8}".prop_map(|text| OutlineNode::new(text, 0));
        leaf.prop_recursive(4, 32, 4, |inner| {
            ("[a-z]{1,8}", prop::collection::vec(inner, 0..4)).prop_map(|(text, children)| {
                children
                    .into_iter()
                    .fold(OutlineNode::new(text, 0), OutlineNode::with_child)
            })
        })
    }

    proptest! {
        #[test]
        fn serialized_line_count_matches_node_count(
            roots in prop::collection::vec(node_strategy(), 1..4)
        ) {
            let outline = Outline::new(roots);
            let text = outline.to_text(IndentUnit::FOUR_SPACES);

            prop_assert_eq!(text.lines().count(), outline.len());
        }
    }
}
