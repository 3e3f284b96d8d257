//! GitHub-compatible table of contents generation for Markdown documents.
//!
//! Header lines are selected, parsed into depth and text, turned into
//! anchors the way GitHub renders them (repeats get `-1`, `-2`, ...) and
//! rendered as an indented list of links.

pub mod cli;
pub mod config;
pub mod markdown;
pub mod source;
pub mod utils;

pub use markdown::{build_toc, build_toc_with_options, TableOfContents, TocEntry, TocOptions};
