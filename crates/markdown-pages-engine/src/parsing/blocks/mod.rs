//! # Block Parsing
//!
//! Two-phase block parsing over a whole document.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is cut into blocks at runs of
//!    blank lines, and each block is trimmed
//! 2. **Classification** (`classify`): each block is assigned a `BlockKind` by a
//!    fixed priority list of whole-block rules
//!
//! Content extraction (`content`) then strips the structural markers for the
//! block's kind so the remaining text can be inline-tokenized.
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, BlockQuote, lists)
//! - **`segment`**: `segment_blocks` splits a document into trimmed block strings
//! - **`classify`**: `classify` picks the kind of one block
//! - **`content`**: `extract_content` strips markers per kind
//!
//! ## Key Invariants
//!
//! - Blocks never contain blank lines, so a fenced code block with a blank
//!   line inside it is split in two
//! - Fenced code content is a raw zone: no inline tokenizing inside

pub mod classify;
pub mod content;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::classify;
pub use content::{extract_content, normalize_text};
pub use segment::segment_blocks;
pub use types::{Block, BlockKind};

/// Segments `document` and classifies every block, in source order.
pub fn parse_blocks(document: &str) -> Vec<Block> {
    segment_blocks(document)
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let kind = classify(&raw);
            log::debug!("block {index}: {kind:?}");
            Block { raw, kind }
        })
        .collect()
}
