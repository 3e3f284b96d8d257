use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Serialize, Deserialize};

use crate::markdown::TocOptions;

/// Output format of the generated table of contents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented markdown list of links
    #[default]
    Markdown,
    /// JSON array of entries
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Deepest header level listed in the ToC
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Output format
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Output file; standard output when unset
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Overlay the values set in `other` on top of this configuration
    pub fn merge(&mut self, other: &Config) {
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
        if other.output.is_some() {
            self.output = other.output.clone();
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn toc_options(&self) -> TocOptions {
        TocOptions::default().with_max_depth(self.max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_unset_values() {
        let mut config = Config {
            max_depth: Some(3),
            format: Some(OutputFormat::Json),
            output: None,
        };
        config.merge(&Config {
            max_depth: None,
            format: Some(OutputFormat::Markdown),
            output: Some(PathBuf::from("TOC.md")),
        });

        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.format(), OutputFormat::Markdown);
        assert_eq!(config.output, Some(PathBuf::from("TOC.md")));
    }

    #[test]
    fn test_default_format_is_markdown() {
        assert_eq!(Config::default().format(), OutputFormat::Markdown);
        assert_eq!(Config::default().toc_options(), TocOptions::default());
    }
}
