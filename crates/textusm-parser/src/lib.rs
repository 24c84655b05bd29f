//! # TextUSM Parser
//!
//! Parser for the TextUSM outline format. Every TextUSM diagram is written
//! as indented plain text, one item per line, where indentation expresses
//! nesting. This crate turns that text into an [`Outline`] and checks it.
//!
//! - [`parse`] builds an outline from any input, repairing bad indentation.
//! - [`validate`] and [`is_valid`] check indentation strictly.
//! - [`format`] extracts an outline from fenced markdown.
//! - [`extract_canvas`] collects hypothesis canvas items from markdown.
//!
//! ## Usage
//!
//! ```
//! # use textusm_core::indent::IndentUnit;
//! # use textusm_parser::{error::ParseError, parse, validate};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "Sign up\n  Enter email\n  Confirm email\nLog in\n  Enter password";
//!
//!     validate(source, IndentUnit::TWO_SPACES)?;
//!     let outline = parse(source, IndentUnit::TWO_SPACES);
//!
//!     assert_eq!(outline.roots().len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! [`Outline`]: textusm_core::outline::Outline

mod canvas;
pub mod error;
mod format;
mod lexer;
mod parser;
mod span;
mod validate;

pub use canvas::{HypothesisCanvas, extract_canvas};
pub use format::{FormatOptions, format};
pub use parser::{parse, parse_with_diagnostics};
pub use span::Span;
pub use validate::{is_valid, validate};
