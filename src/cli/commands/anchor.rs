use crate::cli::types::Commands;
use crate::markdown::toc::{header_anchor, AnchorRegistry};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the anchor command
pub fn handle_anchor_command(command: &Commands) -> BoxResult<()> {
    if let Commands::Anchor { texts } = command {
        let mut out = String::new();
        for anchor in anchors_for(texts) {
            out.push_str(&anchor);
            out.push('\n');
        }
        fs::write_stdout(&out)?;
    }
    Ok(())
}

/// Anchors for a sequence of header texts, as if they were headers of one document
pub fn anchors_for<S: AsRef<str>>(texts: &[S]) -> Vec<String> {
    let mut registry = AnchorRegistry::new();
    texts
        .iter()
        .map(|text| registry.register(&header_anchor(text.as_ref())))
        .collect()
}
