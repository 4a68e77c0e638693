//! # HTML Node Tree
//!
//! Spans and classified blocks become a tree of [`HtmlNode`]s, built bottom-up
//! and serialized with [`HtmlNode::render`].
//!
//! - **`node`**: `HtmlNode` (leaf or parent) and `RenderError`
//! - **`attributes`**: insertion-ordered attribute map
//! - **`build`**: span-to-node and block-to-node mapping

pub mod attributes;
pub mod build;
pub mod node;

pub use attributes::Attributes;
pub use build::{block_to_node, span_to_node, spans_to_nodes, text_to_children};
pub use node::{HtmlNode, RenderError};
