use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// Up to three spaces of indentation, a run of `#`, then whitespace
    static ref HEADER_LINE_REGEX: Regex = Regex::new(r"^ {0,3}#+\s+").unwrap();

    static ref LINE_BREAK_REGEX: Regex = Regex::new(r"[\r\n]").unwrap();
}

/// Check whether a single (unsplit) line looks like an ATX header
pub fn is_header_line(line: &str) -> bool {
    HEADER_LINE_REGEX.is_match(line)
}

/// Split markdown text into lines and keep the trimmed header lines, in document order
pub fn select_header_lines(markdown: &str) -> Vec<&str> {
    LINE_BREAK_REGEX
        .split(markdown)
        .filter(|line| is_header_line(line))
        .map(str::trim)
        .collect()
}
