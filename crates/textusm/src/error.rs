//! Error types for TextUSM operations.
//!
//! This module provides the main error type [`TextUsmError`] which wraps
//! the error conditions that can occur while processing outlines.

use std::io;

use thiserror::Error;

use textusm_core::diagram::UnknownDiagramType;
use textusm_parser::error::ParseError;

/// The main error type for TextUSM operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the validated source next to the diagnostics so
/// that reporters can render labeled source snippets.
#[derive(Debug, Error)]
pub enum TextUsmError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    UnknownDiagram(#[from] UnknownDiagramType),
}

impl TextUsmError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
