/// Bulleted list syntax.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn is_item_line(line: &str) -> bool {
        Self::MARKERS.iter().any(|marker| line.starts_with(marker))
    }

    /// Item text with its bullet removed.
    pub fn item_text(line: &str) -> &str {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
            .unwrap_or(line)
            .trim()
    }
}

/// Numbered list syntax.
///
/// The number is whatever precedes the first `". "` anywhere on the line.
pub struct OrderedList;

impl OrderedList {
    pub const SEPARATOR: &'static str = ". ";

    /// The item number, if the text before the first separator is all digits.
    ///
    /// A line with no separator at all is taken whole as the prefix.
    pub fn number(line: &str) -> Option<usize> {
        let prefix = line
            .split_once(Self::SEPARATOR)
            .map_or(line, |(prefix, _)| prefix);
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        prefix.parse().ok()
    }

    /// Item text after the first separator.
    pub fn item_text(line: &str) -> &str {
        line.split_once(Self::SEPARATOR)
            .map_or(line, |(_, rest)| rest)
            .trim()
    }
}
