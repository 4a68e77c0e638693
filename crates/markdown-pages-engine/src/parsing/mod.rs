pub mod blocks;
pub mod inline;

pub use blocks::{Block, BlockKind, parse_blocks};
pub use inline::{InlineError, Span, SpanKind, tokenize};
