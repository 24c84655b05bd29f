//! Error codes for the TextUSM diagnostic system.
//!
//! Error codes are organized by scope:
//! - `E0xx` - Document errors
//! - `E1xx` - Line indentation errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Document Errors (E0xx)
    // =========================================================================
    /// Empty document.
    ///
    /// The input is empty or contains only whitespace, so there is no
    /// outline to validate.
    E001,

    // =========================================================================
    // Indentation Errors (E1xx)
    // =========================================================================
    /// Misaligned indentation.
    ///
    /// The leading whitespace of a line is not a whole number of
    /// indentation units.
    E100,

    /// Indented first line.
    ///
    /// The first non-blank line of an outline must start at column zero.
    E101,

    /// Indentation jump.
    ///
    /// A line is nested more than one level deeper than the line above it.
    E102,

    /// Mixed indentation.
    ///
    /// The leading whitespace of a line contains characters other than the
    /// configured indentation character, such as a tab in a
    /// spaces-indented outline.
    E103,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "empty document",
            ErrorCode::E100 => "misaligned indentation",
            ErrorCode::E101 => "indented first line",
            ErrorCode::E102 => "indentation jump",
            ErrorCode::E103 => "mixed indentation",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "empty document");
        assert_eq!(ErrorCode::E103.description(), "mixed indentation");
    }
}
