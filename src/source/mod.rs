//! Providers of the markdown text a table of contents is built from.
//!
//! A ToC is built either from a whole document or from a selected part of
//! it; the core does not know which one it received.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use log::debug;

use crate::utils::error::{BoxResult, TocError};
use crate::utils::fs;

/// A 1-based, inclusive range of lines; open bounds extend to the document edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl LineRange {
    fn first_line(&self) -> usize {
        self.start.unwrap_or(1)
    }

    fn contains(&self, line_number: usize) -> bool {
        line_number >= self.first_line() && self.end.map_or(true, |end| line_number <= end)
    }
}

impl FromStr for LineRange {
    type Err = TocError;

    /// Parse `START:END`, `START:`, `:END` or a single line number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_bound = |bound: &str| -> Result<Option<usize>, TocError> {
            let bound = bound.trim();
            if bound.is_empty() {
                return Ok(None);
            }
            match bound.parse::<usize>() {
                Ok(0) | Err(_) => Err(TocError::Selection(format!(
                    "Invalid line number '{}' in range '{}'", bound, s
                ))),
                Ok(n) => Ok(Some(n)),
            }
        };

        let range = match s.split_once(':') {
            Some((start, end)) => LineRange {
                start: parse_bound(start)?,
                end: parse_bound(end)?,
            },
            None => {
                let line = parse_bound(s)?;
                if line.is_none() {
                    return Err(TocError::Selection("Empty line range".to_string()));
                }
                LineRange { start: line, end: line }
            }
        };

        if let (Some(start), Some(end)) = (range.start, range.end) {
            if start > end {
                return Err(TocError::Selection(format!(
                    "Line range '{}' ends before it starts", s
                )));
            }
        }

        Ok(range)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |b: Option<usize>| b.map(|n| n.to_string()).unwrap_or_default();
        write!(f, "{}:{}", bound(self.start), bound(self.end))
    }
}

/// Cut the selected lines out of a document, keeping their line terminators
pub fn select_lines<'a>(text: &'a str, range: &LineRange) -> BoxResult<&'a str> {
    let mut start_offset = None;
    let mut end_offset = 0;
    let mut offset = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        let line_number = index + 1;
        if range.contains(line_number) {
            start_offset.get_or_insert(offset);
            end_offset = offset + line.len();
        }
        offset += line.len();
    }

    match start_offset {
        Some(start) if end_offset > start => Ok(&text[start..end_offset]),
        _ => Err(TocError::Selection("Nothing is selected!".to_string()).into()),
    }
}

/// Where the markdown text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// The whole content of a file
    Document(PathBuf),
    /// The whole of standard input
    Stdin,
    /// A range of lines of a file, or of standard input when no path is given
    Selection {
        path: Option<PathBuf>,
        lines: LineRange,
    },
}

impl TextSource {
    /// Pick the source matching an optional input path and line range
    pub fn from_args(path: Option<PathBuf>, lines: Option<LineRange>) -> Self {
        match (path, lines) {
            (path, Some(lines)) => TextSource::Selection { path, lines },
            (Some(path), None) => TextSource::Document(path),
            (None, None) => TextSource::Stdin,
        }
    }

    /// Read the markdown text this source provides
    pub fn read(&self) -> BoxResult<String> {
        match self {
            TextSource::Document(path) => {
                debug!("Reading document {}", path.display());
                fs::read_file(path)
            }
            TextSource::Stdin => {
                debug!("Reading document from standard input");
                fs::read_stdin()
            }
            TextSource::Selection { path, lines } => {
                let text = match path {
                    Some(path) => fs::read_file(path)?,
                    None => fs::read_stdin()?,
                };
                debug!("Selecting lines {}", lines);
                Ok(select_lines(&text, lines)?.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_range() {
        assert_eq!("3:7".parse::<LineRange>().unwrap(), LineRange { start: Some(3), end: Some(7) });
        assert_eq!("3:".parse::<LineRange>().unwrap(), LineRange { start: Some(3), end: None });
        assert_eq!(":7".parse::<LineRange>().unwrap(), LineRange { start: None, end: Some(7) });
        assert_eq!("4".parse::<LineRange>().unwrap(), LineRange { start: Some(4), end: Some(4) });
    }

    #[test]
    fn test_parse_invalid_line_range() {
        assert!("".parse::<LineRange>().is_err());
        assert!("0:3".parse::<LineRange>().is_err());
        assert!("a:b".parse::<LineRange>().is_err());
        assert!("9:2".parse::<LineRange>().is_err());
    }

    #[test]
    fn test_display_line_range() {
        assert_eq!(LineRange { start: Some(2), end: None }.to_string(), "2:");
    }

    #[test]
    fn test_select_lines() {
        let text = "# one\ntext\n## two\r\n### three";
        let range = "2:3".parse::<LineRange>().unwrap();
        assert_eq!(select_lines(text, &range).unwrap(), "text\n## two\r\n");

        let tail = "3:".parse::<LineRange>().unwrap();
        assert_eq!(select_lines(text, &tail).unwrap(), "## two\r\n### three");
    }

    #[test]
    fn test_select_lines_past_end() {
        let range = "10:12".parse::<LineRange>().unwrap();
        let err = select_lines("# one\n", &range).unwrap_err();
        assert!(err.to_string().contains("Nothing is selected!"));
    }

    #[test]
    fn test_read_document_and_selection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        std::fs::write(&path, "# Title\n## Install\n## Usage\n").unwrap();

        let document = TextSource::from_args(Some(path.clone()), None);
        assert_eq!(document, TextSource::Document(path.clone()));
        assert_eq!(document.read().unwrap(), "# Title\n## Install\n## Usage\n");

        let selection = TextSource::from_args(Some(path), Some("2:2".parse().unwrap()));
        assert_eq!(selection.read().unwrap(), "## Install\n");
    }

    #[test]
    fn test_from_args_defaults_to_stdin() {
        assert_eq!(TextSource::from_args(None, None), TextSource::Stdin);
    }
}
