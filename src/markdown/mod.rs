pub mod toc;
pub mod types;

pub use toc::{build_toc, build_toc_with_options, TableOfContents, TocEntry, TocOptions};
pub use types::ParsedHeader;
