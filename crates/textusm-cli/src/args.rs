//! Command-line argument definitions for the TextUSM CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments control configuration file selection and
//! logging verbosity; each [`Command`] names one outline operation.

use clap::{Parser, Subcommand};

/// Command-line arguments for the TextUSM outline tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Outline operations.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check the indentation of an outline
    Validate {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Extract the outline from fenced markdown
    Format {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Parse an outline and write it back normalized
    Parse {
        #[command(flatten)]
        io: IoArgs,

        /// Diagram type, by code (`usm`) or name (`user_story_map`)
        #[arg(short, long, default_value = "usm")]
        diagram: String,

        /// Reject outlines with invalid indentation instead of repairing them
        #[arg(long)]
        strict: bool,
    },

    /// Print the starter outline of a diagram type
    Template {
        /// Diagram type, by code or name
        diagram: String,

        /// Path to the output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Extract a hypothesis canvas from markdown
    Canvas {
        #[command(flatten)]
        io: IoArgs,
    },

    /// List every diagram type
    Diagrams,
}

/// Input and output paths shared by the file-processing commands.
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    /// Path to the input file, or `-` for stdin
    #[arg(help = "Path to the input file, or `-` for stdin")]
    pub input: String,

    /// Path to the output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_defaults() {
        let args = Args::try_parse_from(["textusm", "parse", "map.txt"]).unwrap();

        match args.command {
            Command::Parse { io, diagram, strict } => {
                assert_eq!(io.input, "map.txt");
                assert_eq!(io.output, None);
                assert_eq!(diagram, "usm");
                assert!(!strict);
            }
            other => panic!("Expected parse command, got {other:?}"),
        }
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = Args::try_parse_from([
            "textusm",
            "validate",
            "-",
            "--config",
            "textusm.toml",
            "--log-level",
            "off",
        ])
        .unwrap();

        assert_eq!(args.config.as_deref(), Some("textusm.toml"));
        assert_eq!(args.log_level, "off");
        assert!(matches!(args.command, Command::Validate { .. }));
    }

    #[test]
    fn test_template_requires_diagram() {
        assert!(Args::try_parse_from(["textusm", "template"]).is_err());
    }
}
