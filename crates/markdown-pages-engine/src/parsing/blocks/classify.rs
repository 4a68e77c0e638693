use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a trimmed block. The first matching rule wins:
///
/// 1. heading (a block opening with `#` that is not a valid heading is a paragraph)
/// 2. fenced code
/// 3. quote
/// 4. unordered list
/// 5. ordered list, numbered from 1 with no gaps
/// 6. paragraph
pub fn classify(block: &str) -> BlockKind {
    if block.starts_with(Heading::MARKER) {
        return match Heading::level(block) {
            Some(level) => BlockKind::Heading { level },
            None => BlockKind::Paragraph,
        };
    }

    if CodeFence::encloses(block) {
        return BlockKind::Code;
    }

    let lines: Vec<&str> = block.lines().collect();

    if lines.iter().all(|line| BlockQuote::is_quote_line(line)) {
        BlockKind::Quote
    } else if lines.iter().all(|line| UnorderedList::is_item_line(line)) {
        BlockKind::UnorderedList
    } else if lines
        .iter()
        .enumerate()
        .all(|(i, line)| OrderedList::number(line) == Some(i + 1))
    {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    }
}
