//! Configuration types for TextUSM outline processing.
//!
//! This module provides configuration structures that control how outlines
//! are indented and how pasted markdown is formatted. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining outline and format settings.
//! - [`OutlineConfig`] - Controls the [`IndentUnit`] used to read and write outlines.
//! - [`FormatConfig`] - Controls which fenced blocks the formatter extracts.
//!
//! # Example
//!
//! ```
//! # use textusm::config::AppConfig;
//! # use textusm_core::indent::IndentUnit;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.outline().indent_unit(), IndentUnit::TWO_SPACES);
//! assert_eq!(config.format().fence_language(), "markdown");
//! ```

use serde::Deserialize;

use textusm_core::indent::IndentUnit;
use textusm_parser::FormatOptions;

/// Top-level application configuration combining outline and format settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Outline configuration section.
    #[serde(default)]
    outline: OutlineConfig,

    /// Format configuration section.
    #[serde(default)]
    format: FormatConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified outline and format configurations.
    pub fn new(outline: OutlineConfig, format: FormatConfig) -> Self {
        Self { outline, format }
    }

    /// Returns the outline configuration.
    pub fn outline(&self) -> &OutlineConfig {
        &self.outline
    }

    /// Returns the format configuration.
    pub fn format(&self) -> &FormatConfig {
        &self.format
    }
}

/// Indentation settings for reading and writing outlines.
///
/// The unit is written in TOML either as a width (`indent_unit = 4`) or as
/// the string `"tab"`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutlineConfig {
    /// The whitespace run standing for one level of nesting.
    #[serde(default)]
    indent_unit: IndentUnit,
}

impl OutlineConfig {
    pub fn new(indent_unit: IndentUnit) -> Self {
        Self { indent_unit }
    }

    /// Returns the configured [`IndentUnit`].
    pub fn indent_unit(&self) -> IndentUnit {
        self.indent_unit
    }
}

/// Settings for extracting outlines from fenced markdown.
#[derive(Debug, Clone, Deserialize)]
pub struct FormatConfig {
    /// Language tag of the fenced blocks to extract.
    #[serde(default = "default_fence_language")]
    fence_language: String,
}

fn default_fence_language() -> String {
    FormatOptions::default().fence_language().to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            fence_language: default_fence_language(),
        }
    }
}

impl FormatConfig {
    pub fn new(fence_language: impl Into<String>) -> Self {
        Self {
            fence_language: fence_language.into(),
        }
    }

    /// Returns the fence language tag.
    pub fn fence_language(&self) -> &str {
        &self.fence_language
    }

    /// Converts this section into formatter options.
    pub fn to_format_options(&self) -> FormatOptions {
        FormatOptions::new(self.fence_language.as_str())
    }
}
