//! Content extraction: removing the structural markers from a classified block.
//!
//! - Heading: text after the `#`s
//! - Code: lines between the fences, dedented, always ending in one `\n`
//! - Quote and Paragraph: lines joined into a single space-separated line
//! - Lists: one item per line, markers removed

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Returns the text of `block` stripped of the markers for `kind`.
///
/// List items come back newline-separated, one per line.
pub fn extract_content(block: &str, kind: BlockKind) -> String {
    match kind {
        BlockKind::Heading { .. } => Heading::text(block).to_string(),
        BlockKind::Code => code_content(block),
        BlockKind::Quote => {
            let lines: Vec<&str> = block.lines().map(BlockQuote::strip_prefixes).collect();
            normalize_text(&lines.join("\n"))
        }
        BlockKind::UnorderedList => block
            .lines()
            .map(UnorderedList::item_text)
            .collect::<Vec<_>>()
            .join("\n"),
        BlockKind::OrderedList => block
            .lines()
            .map(OrderedList::item_text)
            .collect::<Vec<_>>()
            .join("\n"),
        BlockKind::Paragraph => normalize_text(block),
    }
}

/// Collapses multi-line text into one line.
///
/// Surrounding blank lines are dropped and the common indentation removed
/// before each line is trimmed and the lines joined with single spaces.
pub fn normalize_text(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();
    trim_blank_lines(&mut lines);
    dedent(&lines)
        .into_iter()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

fn code_content(block: &str) -> String {
    let mut lines: Vec<&str> = block.lines().collect();
    trim_blank_lines(&mut lines);

    if lines.first().is_some_and(|line| CodeFence::opens(line)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| CodeFence::closes(line)) {
        lines.pop();
    }

    let mut content = dedent(&lines).join("\n");
    content.push('\n');
    content
}

fn trim_blank_lines(lines: &mut Vec<&str>) {
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    let leading = lines
        .iter()
        .take_while(|line| line.trim().is_empty())
        .count();
    lines.drain(..leading);
}

/// Removes the indentation shared by all non-blank lines. Blank lines become empty.
fn dedent<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let width = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                ""
            } else {
                skip_chars(line, width)
            }
        })
        .collect()
}

/// Leading whitespace, counted in chars.
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((i, _)) => &line[i..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn heading_content() {
        assert_eq!(
            extract_content("### Deep  ", BlockKind::Heading { level: 3 }),
            "Deep"
        );
    }

    #[test]
    fn paragraph_lines_are_joined() {
        assert_eq!(
            extract_content(
                "This is **bolded** paragraph\n    text in a p\n    tag here",
                BlockKind::Paragraph
            ),
            "This is **bolded** paragraph text in a p tag here"
        );
    }

    #[test]
    fn quote_markers_are_stripped() {
        assert_eq!(
            extract_content("> first line\n>second line\n>> nested", BlockKind::Quote),
            "first line second line nested"
        );
    }

    #[test]
    fn unordered_list_items() {
        assert_eq!(
            extract_content("- one\n* two\n- three. four", BlockKind::UnorderedList),
            "one\ntwo\nthree. four"
        );
    }

    #[test]
    fn ordered_list_items() {
        assert_eq!(
            extract_content("1. one\n2. two", BlockKind::OrderedList),
            "one\ntwo"
        );
    }

    #[test]
    fn code_keeps_line_breaks_and_ends_with_newline() {
        assert_eq!(
            extract_content("```\nline1\nline2\n```", BlockKind::Code),
            "line1\nline2\n"
        );
    }

    #[test]
    fn code_drops_info_string_and_common_indent() {
        let block = "```rust\n    fn main() {\n        run();\n    }\n    ```";
        assert_eq!(
            extract_content(block, BlockKind::Code),
            "fn main() {\n    run();\n}\n"
        );
    }

    #[test]
    fn empty_code_block_is_a_single_newline() {
        assert_eq!(extract_content("```\n```", BlockKind::Code), "\n");
        assert_eq!(extract_content("```", BlockKind::Code), "\n");
    }

    #[test]
    fn normalize_drops_surrounding_blank_lines() {
        assert_eq!(normalize_text("\n   a\n     b\n\n"), "a b");
    }

    #[test]
    fn dedent_counts_chars_not_bytes() {
        assert_eq!(dedent(&["\u{3000}x", "  y"]), vec!["x", " y"]);
    }
}
