use regex::Regex;
use lazy_static::lazy_static;

use crate::markdown::types::ParsedHeader;

lazy_static! {
    static ref HEADER_MARKER_REGEX: Regex = Regex::new(r"^#+\s+").unwrap();

    /// Non-greedy on both parts; the first `)` closes the link target
    static ref LINK_REGEX: Regex = Regex::new(r"\[(.*?)\]\(.*?\)").unwrap();
}

/// Count the `#` characters at the start of a line (0 for non-header input)
pub fn header_depth(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}

/// Extract the display text of a header line, keeping only the label of inline links
pub fn header_text(line: &str) -> String {
    let text = HEADER_MARKER_REGEX.replace(line, "");
    LINK_REGEX.replace_all(&text, "$1").into_owned()
}

/// Parse a selected header line into its depth and display text
pub fn parse_header(line: &str) -> ParsedHeader {
    ParsedHeader {
        depth: header_depth(line),
        text: header_text(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_depth() {
        assert_eq!(header_depth("   123"), 0);
        assert_eq!(header_depth(""), 0);
        assert_eq!(header_depth("####x"), 4);
        assert_eq!(header_depth("#########################               123"), 25);
    }

    #[test]
    fn test_header_text() {
        assert_eq!(header_text("### header1"), "header1");
        assert_eq!(header_text("# header1 and some text"), "header1 and some text");
    }

    #[test]
    fn test_header_text_strips_links() {
        assert_eq!(
            header_text("# Header with [GitHub](https://github.com/) and [Google](https://google.com/) links"),
            "Header with GitHub and Google links"
        );
        assert_eq!(header_text("# Header with [A](url1) and [B](url2)"), "Header with A and B");
    }

    #[test]
    fn test_link_target_closes_on_first_paren() {
        // Nested parentheses are not balanced; the remainder stays in the text
        assert_eq!(header_text("## See [docs](https://x.org/a_(b))"), "See docs)");
    }

    #[test]
    fn test_header_text_without_marker() {
        assert_eq!(header_text("plain"), "plain");
    }

    #[test]
    fn test_parse_header() {
        let header = parse_header("## Install [guide](#guide)");
        assert_eq!(header.depth, 2);
        assert_eq!(header.text, "Install guide");
    }
}
