//! CLI logic for the TextUSM outline tool.
//!
//! This module contains the core CLI logic: reading outlines from files or
//! stdin, running one [`Command`] through the [`DiagramBuilder`], and writing
//! the result to a file or stdout.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, IoArgs};

use std::{
    fs,
    io::{self, Read, Write},
};

use log::{info, warn};

use textusm::{DiagramBuilder, TextUsmError, diagram::DiagramType};

use error_adapter::DiagnosticAdapter;

/// Run the TextUSM CLI application
///
/// # Errors
///
/// Returns `TextUsmError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid outlines (`validate`, `parse --strict`)
/// - Unknown diagram types
pub fn run(args: &Args) -> Result<(), TextUsmError> {
    let app_config = config::load_config(args.config.as_ref())?;
    let builder = DiagramBuilder::new(app_config);

    match &args.command {
        Command::Validate { io } => {
            let source = read_input(&io.input)?;
            builder.validate(&source)?;
            info!(input_path = io.input; "Outline is valid");
            Ok(())
        }
        Command::Format { io } => {
            let source = read_input(&io.input)?;
            let formatted = builder.format(&source);
            write_output(io.output.as_deref(), &formatted)
        }
        Command::Parse {
            io,
            diagram,
            strict,
        } => {
            let kind: DiagramType = diagram.parse()?;
            let source = read_input(&io.input)?;
            info!(input_path = io.input, kind = kind.code(), strict = *strict; "Parsing outline");

            let diagram = if *strict {
                builder.parse_strict(&source, kind)?
            } else {
                let (diagram, warnings) = builder.parse_with_warnings(&source, kind);
                for warning in &warnings {
                    warn!("{}", error_adapter::render(&DiagnosticAdapter::new(warning, &source)));
                }
                diagram
            };

            write_output(io.output.as_deref(), &builder.render_text(diagram.outline()))
        }
        Command::Template { diagram, output } => {
            let kind: DiagramType = diagram.parse()?;
            write_output(output.as_deref(), builder.template(kind))
        }
        Command::Canvas { io } => {
            let markdown = read_input(&io.input)?;
            let canvas = builder.extract_canvas(&markdown);
            write_output(io.output.as_deref(), &builder.render_text(&canvas.to_outline()))
        }
        Command::Diagrams => {
            let listing = DiagramType::ALL
                .iter()
                .map(|kind| format!("{:<4} {:<22} {}", kind.code(), kind.cli_name(), kind.label()))
                .collect::<Vec<_>>()
                .join("\n");
            write_output(None, &listing)
        }
    }
}

/// Read the whole input file, or stdin when `path` is `-`.
fn read_input(path: &str) -> Result<String, TextUsmError> {
    if path == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }
    Ok(fs::read_to_string(path)?)
}

/// Write `content` to `path`, or to stdout when no path is given.
///
/// A trailing newline is added on stdout only.
fn write_output(path: Option<&str>, content: &str) -> Result<(), TextUsmError> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(output_file = path; "Output written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
        }
    }
    Ok(())
}
