/// Depth and display text of a single header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedHeader {
    /// Number of leading `#` characters
    pub depth: usize,
    /// Header text with link markup reduced to the link labels
    pub text: String,
}
