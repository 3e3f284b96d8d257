mod anchor;
mod generator;
mod parser;
mod selector;

pub use anchor::{header_anchor, slugify, AnchorRegistry, SlugRule, SLUG_RULES};
pub use generator::{TableOfContents, TocEntry};
pub use parser::{header_depth, header_text, parse_header};
pub use selector::{is_header_line, select_header_lines};

/// Options for table of contents generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TocOptions {
    /// Deepest header level to list; deeper headers still reserve their anchors
    pub max_depth: Option<usize>,
}

impl TocOptions {
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    fn includes(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |max| depth <= max)
    }
}

/// Build the markdown table of contents for a document.
///
/// Never fails: text without headers yields an empty string.
pub fn build_toc(markdown: &str) -> String {
    build_toc_with_options(markdown, &TocOptions::default()).to_markdown()
}

/// Build the table of contents entries for a document with custom options
pub fn build_toc_with_options(markdown: &str, options: &TocOptions) -> TableOfContents {
    let mut toc = TableOfContents::new();
    let mut anchors = AnchorRegistry::new();

    for line in select_header_lines(markdown) {
        let header = parse_header(line);
        let anchor = anchors.register(&header_anchor(&header.text));

        if options.includes(header.depth) {
            toc.push(TocEntry::new(header.depth, header.text, anchor));
        }
    }

    toc
}
