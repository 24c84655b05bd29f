//! Indentation units.
//!
//! An outline expresses nesting purely through leading whitespace. The
//! [`IndentUnit`] names the run of whitespace that stands for one level.

use std::{fmt, num::NonZeroUsize, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Errors produced when an indentation unit cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndentUnitError {
    #[error("indentation width must be at least one space")]
    ZeroWidth,

    #[error("invalid indentation unit `{0}`: expected a width such as `2` or `tab`")]
    Invalid(String),
}

/// The whitespace run that represents one level of nesting.
///
/// # Examples
///
/// ```
/// # use textusm_core::indent::IndentUnit;
/// let unit = IndentUnit::spaces(4).unwrap();
/// assert_eq!(unit.width(), 4);
/// assert_eq!(unit.render(2), "        ");
///
/// assert_eq!("tab".parse::<IndentUnit>().unwrap(), IndentUnit::Tab);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "RawIndentUnit")]
pub enum IndentUnit {
    /// A fixed number of spaces per level.
    Spaces(NonZeroUsize),
    /// A single tab character per level.
    Tab,
}

const TWO: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(width) => width,
    None => unreachable!(),
};

const FOUR: NonZeroUsize = match NonZeroUsize::new(4) {
    Some(width) => width,
    None => unreachable!(),
};

impl IndentUnit {
    /// Two spaces per level, the unit the strict validator checks against.
    pub const TWO_SPACES: Self = Self::Spaces(TWO);

    /// Four spaces per level, the unit the diagram templates are written in.
    pub const FOUR_SPACES: Self = Self::Spaces(FOUR);

    /// Creates a spaces-based unit.
    ///
    /// # Errors
    ///
    /// Returns [`IndentUnitError::ZeroWidth`] when `width` is zero.
    pub fn spaces(width: usize) -> Result<Self, IndentUnitError> {
        NonZeroUsize::new(width)
            .map(Self::Spaces)
            .ok_or(IndentUnitError::ZeroWidth)
    }

    /// Number of whitespace characters in one level.
    pub fn width(self) -> usize {
        match self {
            Self::Spaces(width) => width.get(),
            Self::Tab => 1,
        }
    }

    /// The character this unit is made of.
    pub fn indent_char(self) -> char {
        match self {
            Self::Spaces(_) => ' ',
            Self::Tab => '\t',
        }
    }

    /// Leading whitespace for a node at `depth`.
    pub fn render(self, depth: usize) -> String {
        std::iter::repeat_n(self.indent_char(), self.width() * depth).collect()
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::TWO_SPACES
    }
}

impl fmt::Display for IndentUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) if width.get() == 1 => write!(f, "1 space"),
            Self::Spaces(width) => write!(f, "{width} spaces"),
            Self::Tab => write!(f, "tab"),
        }
    }
}

impl FromStr for IndentUnit {
    type Err = IndentUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("tab") || s == "\t" {
            return Ok(Self::Tab);
        }

        trimmed
            .parse::<usize>()
            .map_err(|_| IndentUnitError::Invalid(s.to_string()))
            .and_then(Self::spaces)
    }
}

/// Accepts either `indent_unit = 4` or `indent_unit = "tab"` in configuration.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIndentUnit {
    Width(usize),
    Name(String),
}

impl TryFrom<RawIndentUnit> for IndentUnit {
    type Error = IndentUnitError;

    fn try_from(raw: RawIndentUnit) -> Result<Self, Self::Error> {
        match raw {
            RawIndentUnit::Width(width) => Self::spaces(width),
            RawIndentUnit::Name(name) => name.parse(),
        }
    }
}
