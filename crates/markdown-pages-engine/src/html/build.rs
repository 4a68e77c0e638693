use crate::parsing::{
    blocks::BlockKind,
    inline::{InlineError, Span, SpanKind, tokenize},
};

use super::node::HtmlNode;

/// Maps one span to a leaf node.
pub fn span_to_node(span: &Span) -> HtmlNode {
    let text = span.content.as_str();
    match &span.kind {
        SpanKind::Plain => HtmlNode::text(text),
        SpanKind::Bold => HtmlNode::leaf("b", text),
        SpanKind::Italic => HtmlNode::leaf("i", text),
        SpanKind::Code => HtmlNode::leaf("code", text),
        SpanKind::Link { url } => HtmlNode::leaf("a", text).with_attribute("href", url),
        SpanKind::Image { url } => HtmlNode::leaf("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", text),
    }
}

pub fn spans_to_nodes(spans: &[Span]) -> Vec<HtmlNode> {
    spans.iter().map(span_to_node).collect()
}

/// Tokenizes `text` and maps the spans to leaf nodes.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, InlineError> {
    Ok(spans_to_nodes(&tokenize(text)?))
}

/// Builds the node for one block from its extracted content.
///
/// Code content is wrapped verbatim; every other kind is inline-tokenized.
/// List content is one item per line.
pub fn block_to_node(kind: BlockKind, content: &str) -> Result<HtmlNode, InlineError> {
    let node = match kind {
        BlockKind::Heading { level } => {
            HtmlNode::parent(format!("h{level}"), text_to_children(content)?)
        }
        BlockKind::Code => HtmlNode::parent("pre", vec![HtmlNode::leaf("code", content)]),
        BlockKind::Quote => HtmlNode::parent(
            "blockquote",
            vec![HtmlNode::parent("p", text_to_children(content)?)],
        ),
        BlockKind::UnorderedList => HtmlNode::parent("ul", list_items(content)?),
        BlockKind::OrderedList => HtmlNode::parent("ol", list_items(content)?),
        BlockKind::Paragraph => HtmlNode::parent("p", text_to_children(content)?),
    };
    Ok(node)
}

fn list_items(content: &str) -> Result<Vec<HtmlNode>, InlineError> {
    content
        .split('\n')
        .map(|line| Ok(HtmlNode::parent("li", text_to_children(line.trim())?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Span::plain("This is a text node"), "This is a text node")]
    #[case(Span::bold("strong"), "<b>strong</b>")]
    #[case(Span::italic("slanted"), "<i>slanted</i>")]
    #[case(Span::code("x = 1"), "<code>x = 1</code>")]
    #[case(Span::link("docs", "https://docs.rs"), r#"<a href="https://docs.rs">docs</a>"#)]
    #[case(Span::image("a cat", "cat.png"), r#"<img src="cat.png" alt="a cat"></img>"#)]
    fn span_renders(#[case] span: Span, #[case] expected: &str) {
        assert_eq!(span_to_node(&span).render().unwrap(), expected);
    }

    #[test]
    fn plain_span_is_untagged_leaf() {
        let node = span_to_node(&Span::plain("hi"));
        assert_eq!(node.tag(), None);
        assert_eq!(node, HtmlNode::text("hi"));
    }

    #[test]
    fn image_has_empty_value() {
        let node = span_to_node(&Span::image("WhiteBeards Image", "./whitebeard.png"));
        assert_eq!(node.tag(), Some("img"));
        assert_eq!(
            node,
            HtmlNode::leaf("img", "")
                .with_attribute("src", "./whitebeard.png")
                .with_attribute("alt", "WhiteBeards Image")
        );
    }

    #[rstest]
    #[case(BlockKind::Heading { level: 2 }, "Sub **title**", "<h2>Sub <b>title</b></h2>")]
    #[case(BlockKind::Paragraph, "plain _words_", "<p>plain <i>words</i></p>")]
    #[case(BlockKind::Quote, "be `brief`", "<blockquote><p>be <code>brief</code></p></blockquote>")]
    #[case(BlockKind::UnorderedList, "one\n**two**", "<ul><li>one</li><li><b>two</b></li></ul>")]
    #[case(BlockKind::OrderedList, "first\nsecond", "<ol><li>first</li><li>second</li></ol>")]
    fn block_renders(#[case] kind: BlockKind, #[case] content: &str, #[case] expected: &str) {
        assert_eq!(block_to_node(kind, content).unwrap().render().unwrap(), expected);
    }

    #[test]
    fn code_block_is_not_tokenized() {
        let node = block_to_node(BlockKind::Code, "a _b_ **c** `d\n").unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<pre><code>a _b_ **c** `d\n</code></pre>"
        );
    }

    #[test]
    fn unterminated_delimiter_in_list_item_fails() {
        assert!(matches!(
            block_to_node(BlockKind::UnorderedList, "fine\n**broken"),
            Err(InlineError::UnterminatedDelimiter { delimiter: "**", .. })
        ));
    }
}
