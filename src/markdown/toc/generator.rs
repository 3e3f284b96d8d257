use serde::{Serialize, Deserialize};

use crate::utils::error::BoxResult;

/// A single rendered line of the table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub depth: usize,
    pub text: String,
    pub anchor: String,
}

impl TocEntry {
    pub fn new(depth: usize, text: String, anchor: String) -> Self {
        Self { depth, text, anchor }
    }

    /// Render as an indented markdown list item, two spaces per level below the top
    pub fn to_markdown(&self) -> String {
        let indent = "  ".repeat(self.depth.saturating_sub(1));
        format!("{}- [{}]({})\n", indent, self.text, self.anchor)
    }
}

/// Table of contents entries in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    pub entries: Vec<TocEntry>,
}

impl TableOfContents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: TocEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generate the markdown list, one newline-terminated line per entry
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        for entry in &self.entries {
            md.push_str(&entry.to_markdown());
        }
        md
    }

    /// Serialize the entries as a pretty-printed JSON array
    pub fn to_json(&self) -> BoxResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
