//! # markdown-pages-engine
//!
//! Converts a small, fixed subset of Markdown into HTML for static pages.
//!
//! ```text
//! document ─▶ segment_blocks ─▶ classify ─▶ extract_content ─┐
//!                                                             ▼
//!             render ◀─ div ◀─ block_to_node ◀─ tokenize (inline spans)
//! ```
//!
//! - [`parsing`]: block segmentation and classification, inline tokenizing
//! - [`html`]: the [`HtmlNode`] tree and its serialization
//! - [`document`]: whole-document conversion and title extraction
//! - [`site`]: file-system glue that turns a content tree into a site
//!
//! Everything outside [`site`] is pure: strings in, values out, no shared
//! state, so documents can be converted on any number of threads at once.
//!
//! ```
//! use markdown_pages_engine::{extract_title, markdown_to_html};
//!
//! let md = "# Title\n\nSome **bold** text.";
//! assert_eq!(
//!     markdown_to_html(md).unwrap(),
//!     "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>"
//! );
//! assert_eq!(extract_title(md).as_deref(), Some("Title"));
//! ```

pub mod document;
pub mod html;
pub mod parsing;
pub mod site;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use document::{ConversionError, document_to_node, extract_title, markdown_to_html};
pub use html::{Attributes, HtmlNode, RenderError};
pub use parsing::{Block, BlockKind, InlineError, Span, SpanKind, parse_blocks, tokenize};
pub use site::{BuildReport, SiteError, SiteOptions, build_site};
