/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here, not in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn is_quote_line(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips every leading `>` and the whitespace around the remaining text.
    ///
    /// Nested quote markers (`>>`) collapse into one level.
    pub fn strip_prefixes(line: &str) -> &str {
        line.trim_start_matches(Self::PREFIX).trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), "hello");
    }

    #[test]
    fn strip_nested_quote_no_space() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), "hello");
    }

    #[test]
    fn strip_bare_prefix() {
        assert_eq!(BlockQuote::strip_prefixes(">"), "");
    }

    #[test]
    fn indented_marker_is_not_a_quote_line() {
        assert!(!BlockQuote::is_quote_line("  > indented"));
    }
}
