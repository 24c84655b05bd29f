//! Semantic diagram model.
//!
//! A [`Diagram`] is what the rendering layer consumes: the diagram kind that
//! selects a layout, and the outline whose nodes become shapes.
//!
//! ```text
//! Source Text
//!     ↓ lexer
//! Lines
//!     ↓ parser
//! Outline (forest of nodes)
//!     ↓ + DiagramType
//! Diagram (these types)
//!     ↓ renderer (external)
//! ```

use crate::{diagram::DiagramType, outline::Outline};

/// A diagram kind paired with its parsed outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagram {
    kind: DiagramType,
    outline: Outline,
}

impl Diagram {
    pub fn new(kind: DiagramType, outline: Outline) -> Self {
        Self { kind, outline }
    }

    pub fn kind(&self) -> DiagramType {
        self.kind
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn into_outline(self) -> Outline {
        self.outline
    }
}
