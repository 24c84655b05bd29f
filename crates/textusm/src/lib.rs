//! TextUSM - indentation-based outlines for user story maps and canvases.
//!
//! Validation, parsing, formatting and serialization of the plain-text
//! outlines every TextUSM diagram is written in. A diagram type selects how
//! the outline is laid out; the outline itself is shared by all of them.

pub mod config;

mod error;

pub use textusm_core::{canvas, diagram, indent, outline, semantic};
pub use textusm_parser::HypothesisCanvas;

pub use error::TextUsmError;

use log::{debug, info, trace, warn};

use config::AppConfig;
use diagram::DiagramType;
use outline::Outline;
use semantic::Diagram;
use textusm_parser::error::Diagnostic;

/// Builder for validating, parsing and formatting TextUSM outlines.
///
/// Every operation uses the indentation unit and fence language of the
/// builder's [`AppConfig`].
///
/// # Examples
///
/// ```rust
/// use textusm::{DiagramBuilder, config::AppConfig, diagram::DiagramType};
///
/// let source = "Sign up\n  Enter email\nLog in";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DiagramBuilder::new(config);
///
/// // Check indentation, then parse
/// let diagram = builder
///     .parse_strict(source, DiagramType::UserStoryMap)
///     .expect("Failed to parse");
/// assert_eq!(diagram.outline().roots().len(), 2);
///
/// // Write the outline back out
/// assert_eq!(builder.render_text(diagram.outline()), source);
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the builder's configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a diagram of the given kind.
    ///
    /// Parsing never fails: lines with bad indentation are repaired and
    /// logged as warnings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use textusm::{DiagramBuilder, diagram::DiagramType};
    ///
    /// let builder = DiagramBuilder::default();
    /// let diagram = builder.parse("Root\n      Child", DiagramType::MindMap);
    ///
    /// assert_eq!(diagram.outline().max_depth(), Some(1));
    /// ```
    pub fn parse(&self, source: &str, kind: DiagramType) -> Diagram {
        let (diagram, warnings) = self.parse_with_warnings(source, kind);
        for warning in &warnings {
            warn!(code:? = warning.code(); "{warning}");
        }
        diagram
    }

    /// Parse source text and return the repaired-indentation warnings
    /// alongside the diagram instead of logging them.
    pub fn parse_with_warnings(&self, source: &str, kind: DiagramType) -> (Diagram, Vec<Diagnostic>) {
        info!(kind = kind.code(); "Parsing outline");

        let (outline, warnings) =
            textusm_parser::parse_with_diagnostics(source, self.config.outline().indent_unit());

        debug!(nodes = outline.len(), repaired = warnings.len(); "Outline parsed");
        trace!(outline:?; "Parsed outline");

        (Diagram::new(kind, outline), warnings)
    }

    /// Validate source text, then parse it into a diagram of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`TextUsmError::Parse`] with one diagnostic per offending line
    /// if the source fails validation.
    pub fn parse_strict(&self, source: &str, kind: DiagramType) -> Result<Diagram, TextUsmError> {
        self.validate(source)?;

        let outline = textusm_parser::parse(source, self.config.outline().indent_unit());
        debug!(kind = kind.code(), nodes = outline.len(); "Outline parsed");

        Ok(Diagram::new(kind, outline))
    }

    /// Check the indentation of source text.
    ///
    /// # Errors
    ///
    /// Returns [`TextUsmError::Parse`] carrying every violation together with
    /// the source, ready for reporting.
    pub fn validate(&self, source: &str) -> Result<(), TextUsmError> {
        let unit = self.config.outline().indent_unit();
        info!(unit = unit.to_string(); "Validating outline");

        textusm_parser::validate(source, unit)
            .map_err(|err| TextUsmError::new_parse_error(err, source))?;

        debug!("Outline is valid");
        Ok(())
    }

    /// Returns `true` if the source text passes validation.
    pub fn is_valid(&self, source: &str) -> bool {
        textusm_parser::is_valid(source, self.config.outline().indent_unit())
    }

    /// Extract the outline from fenced markdown.
    ///
    /// See [`textusm_parser::format`] for the extraction rules.
    pub fn format(&self, source: &str) -> String {
        let options = self.config.format().to_format_options();
        info!(fence_language = options.fence_language(); "Formatting outline");

        textusm_parser::format(source, &options)
    }

    /// Serialize an outline with the configured indentation unit.
    pub fn render_text(&self, outline: &Outline) -> String {
        outline.to_text(self.config.outline().indent_unit())
    }

    /// The starter outline of a diagram type.
    pub fn template(&self, kind: DiagramType) -> &'static str {
        kind.template()
    }

    /// Collect hypothesis canvas items from a markdown document.
    pub fn extract_canvas(&self, markdown: &str) -> HypothesisCanvas {
        info!("Extracting hypothesis canvas");
        let canvas = textusm_parser::extract_canvas(markdown);
        debug!(empty = canvas.is_empty(); "Canvas extracted");
        canvas
    }
}
