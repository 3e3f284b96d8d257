use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::source::LineRange;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "ghtoc")]
#[command(about = "Build a GitHub-compatible table of contents from Markdown headers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Custom configuration file (YAML, TOML or JSON)
    #[arg(long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false, global = true)]
    pub quiet: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Build the table of contents of a document
    #[command(alias = "b")]
    Build {
        /// Markdown file (defaults to standard input)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Only use the selected lines, 1-based and inclusive
        #[arg(short, long, value_name = "START:END")]
        lines: Option<LineRange>,

        /// Deepest header level to list
        #[arg(short = 'd', long, value_name = "N")]
        max_depth: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the table of contents to a file instead of standard output
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the anchor each header text links to, in order
    #[command(alias = "a")]
    Anchor {
        /// Header texts, as they appear after the `#` marker
        #[arg(required = true, value_name = "TEXT")]
        texts: Vec<String>,
    },
}

impl Commands {
    /// The command run when none is given: build from standard input
    pub fn default_build() -> Self {
        Commands::Build {
            file: None,
            lines: None,
            max_depth: None,
            format: None,
            output: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from([
            "ghtoc", "build", "README.md", "--lines", "3:40", "-d", "2", "--format", "json", "-g",
        ]);
        assert!(cli.debug);
        match cli.command {
            Some(Commands::Build { file, lines, max_depth, format, output }) => {
                assert_eq!(file, Some(PathBuf::from("README.md")));
                assert_eq!(lines, Some(LineRange { start: Some(3), end: Some(40) }));
                assert_eq!(max_depth, Some(2));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(output, None);
            }
            _ => panic!("expected build command"),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["ghtoc", "--quiet"]);
        assert!(cli.quiet);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_invalid_line_range_is_rejected() {
        assert!(Cli::try_parse_from(["ghtoc", "build", "--lines", "5:1"]).is_err());
    }

    #[test]
    fn test_anchor_requires_text() {
        assert!(Cli::try_parse_from(["ghtoc", "anchor"]).is_err());
    }
}
