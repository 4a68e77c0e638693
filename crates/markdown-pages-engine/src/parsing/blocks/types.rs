use super::content::extract_content;

/// The structural kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` to `######` followed by a space.
    Heading {
        /// Number of leading `#` (1-6).
        level: u8,
    },
    /// The fallback when nothing else matches.
    Paragraph,
    /// Text between triple-backtick fences. Never inline-tokenized.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- ` or `* `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... with no gaps.
    OrderedList,
}

/// A trimmed, blank-line-delimited chunk of a document with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub raw: String,
    pub kind: BlockKind,
}

impl Block {
    /// The block text with structural markers removed, ready for node building.
    pub fn content(&self) -> String {
        extract_content(&self.raw, self.kind)
    }
}
