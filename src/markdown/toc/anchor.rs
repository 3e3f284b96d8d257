use std::collections::HashMap;

use regex::Regex;
use lazy_static::lazy_static;

/// A single substitution step of the slug algorithm
pub struct SlugRule {
    pub pattern: Regex,
    pub replacement: &'static str,
    /// Maximum number of replacements, 0 replaces every match
    pub limit: usize,
}

lazy_static! {
    /// Applied in order: substituted hyphens must exist before the character filter runs
    pub static ref SLUG_RULES: Vec<SlugRule> = vec![
        SlugRule { pattern: Regex::new(" ").unwrap(), replacement: "-", limit: 0 },
        SlugRule { pattern: Regex::new("\t").unwrap(), replacement: "--", limit: 1 },
        SlugRule { pattern: Regex::new("[^0-9A-Za-z_#-]").unwrap(), replacement: "", limit: 0 },
    ];
}

/// Build the GitHub-style slug for a piece of header text, without the leading `#`
pub fn slugify(text: &str) -> String {
    let mut slug = text.to_string();
    for rule in SLUG_RULES.iter() {
        slug = rule.pattern.replacen(&slug, rule.limit, rule.replacement).into_owned();
    }
    slug.to_lowercase()
}

/// Build the in-page link target for a piece of header text
pub fn header_anchor(text: &str) -> String {
    format!("#{}", slugify(text))
}

/// Occurrence counts of base anchors within a single ToC build.
///
/// The first occurrence of an anchor is emitted unchanged; the Nth repeat
/// gets a `-N` suffix, the same way GitHub disambiguates heading ids.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    counts: HashMap<String, usize>,
}

impl AnchorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `base` and return the anchor to emit for it
    pub fn register(&mut self, base: &str) -> String {
        let count = self.counts.entry(base.to_string()).or_insert(0);
        let seen = *count;
        *count += 1;

        if seen == 0 {
            base.to_string()
        } else {
            format!("{}-{}", base, seen)
        }
    }

    /// Number of times `base` has been registered so far
    pub fn occurrences(&self, base: &str) -> usize {
        self.counts.get(base).copied().unwrap_or(0)
    }
}
