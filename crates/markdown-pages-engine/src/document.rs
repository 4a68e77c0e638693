//! Whole-document conversion: Markdown in, one root `div` node (or string) out.

use crate::{
    html::{HtmlNode, RenderError, block_to_node},
    parsing::{
        blocks::{kinds::Heading, parse_blocks, segment_blocks},
        inline::InlineError,
    },
};

/// Failure to convert one document. Fatal to that document only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Converts a document into a `div` whose children are one node per block.
pub fn document_to_node(markdown: &str) -> Result<HtmlNode, InlineError> {
    let children = parse_blocks(markdown)
        .iter()
        .map(|block| block_to_node(block.kind, &block.content()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Converts a document straight to its HTML fragment.
///
/// A document with no blocks has an empty root and fails with
/// [`RenderError::EmptyParentChildren`].
pub fn markdown_to_html(markdown: &str) -> Result<String, ConversionError> {
    Ok(document_to_node(markdown)?.render()?)
}

/// Text of the first `# ` heading, if the document has one.
///
/// Deeper headings (`## `) never count.
pub fn extract_title(markdown: &str) -> Option<String> {
    segment_blocks(markdown)
        .into_iter()
        .find(|block| Heading::level(block) == Some(1))
        .map(|block| Heading::text(&block).to_string())
}
