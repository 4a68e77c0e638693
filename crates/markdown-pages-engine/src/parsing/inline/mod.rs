//! # Inline Tokenizing
//!
//! Splits the text of a single block into typed [`Span`]s.
//!
//! ## Passes
//!
//! Tokenizing is a fixed sequence of passes over a span list that starts as a
//! single plain span. Each pass only looks at spans that are still plain, so
//! text claimed by an earlier pass is never re-examined:
//!
//! 1. `**` bold
//! 2. `_` italic
//! 3. `` ` `` code
//! 4. `![alt](url)` images
//! 5. `[text](url)` links (not preceded by `!`)
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: Inline kinds with owned delimiters and patterns
//! - **`parser`**: `tokenize()` entry point and the individual passes
//!
//! ## Limitations
//!
//! Delimiters are matched by plain string splitting. Nested styles and escaped
//! delimiters are not supported, and a delimiter character appearing inside a
//! link target (such as `_` in a URL) counts as a delimiter.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{extract_images, extract_links, split_delimiter, split_images, split_links, tokenize};
pub use types::{Span, SpanKind};

/// Failure to tokenize inline text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InlineError {
    /// A delimiter was opened and never closed within one plain span.
    #[error("unterminated `{delimiter}` delimiter in {text:?}")]
    UnterminatedDelimiter {
        delimiter: &'static str,
        text: String,
    },
}
