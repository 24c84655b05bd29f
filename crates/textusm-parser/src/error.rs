//! Error and diagnostic system for the TextUSM parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, multiple source
//! locations, and help text. Multiple diagnostics are wrapped in [`ParseError`]
//! for returning from strict validation.
//!
//! # Example
//!
//! ```
//! # use textusm_parser::error::{Diagnostic, ErrorCode};
//! # use textusm_parser::Span;
//!
//! let line = Span::new(5..13);
//! let previous = Span::new(0..4);
//!
//! let diag = Diagnostic::error("indentation increases by more than one level")
//!     .with_code(ErrorCode::E102)
//!     .with_label(line, "indented 2 levels deeper")
//!     .with_secondary_label(previous, "relative to this line")
//!     .with_help("indent by exactly 2 spaces relative to the line above");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
