//! Inline kinds that own their syntax.
//!
//! All delimiter strings and reference patterns live here. The parser asks
//! these types for them and never hardcodes `**` or `[`.

use super::types::SpanKind;

/// A style marked by the same delimiter on both sides of its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    Bold,
    Italic,
    Code,
}

impl Delimited {
    /// Delimited styles in the order the tokenizer applies them.
    pub const PASSES: [Delimited; 3] = [Delimited::Bold, Delimited::Italic, Delimited::Code];

    pub fn delimiter(self) -> &'static str {
        match self {
            Delimited::Bold => "**",
            Delimited::Italic => "_",
            Delimited::Code => "`",
        }
    }

    pub fn span_kind(self) -> SpanKind {
        match self {
            Delimited::Bold => SpanKind::Bold,
            Delimited::Italic => SpanKind::Italic,
            Delimited::Code => SpanKind::Code,
        }
    }
}

/// `![alt](url)`
pub struct ImageRef;

impl ImageRef {
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";
}

/// `[text](url)`
pub struct LinkRef;

impl LinkRef {
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";
    /// A match starting right after this character is image syntax, not a link.
    pub const EXCLUDED_PREFIX: char = '!';
}
