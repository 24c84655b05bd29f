//! TextUSM Core Types and Definitions
//!
//! This crate provides the foundational types for the TextUSM outline format.
//! It includes:
//!
//! - **Indentation**: The unit one nesting level is written with ([`indent::IndentUnit`])
//! - **Outline**: The parsed forest of labeled nodes ([`outline`] module)
//! - **Diagram**: The catalogue of supported diagram kinds ([`diagram::DiagramType`])
//! - **Canvas**: Hypothesis canvas sections ([`canvas`] module)
//! - **Semantic**: A diagram kind paired with its outline ([`semantic::Diagram`])

pub mod canvas;
pub mod diagram;
pub mod indent;
pub mod outline;
pub mod semantic;
