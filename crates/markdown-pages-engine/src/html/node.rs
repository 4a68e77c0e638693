use super::attributes::Attributes;

/// Failure to serialize an [`HtmlNode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("leaf node has no value (tag: {tag:?})")]
    MissingLeafValue { tag: Option<String> },

    #[error("parent node has no tag")]
    MissingParentTag,

    #[error("parent node <{tag}> has no children")]
    EmptyParentChildren { tag: String },
}

/// A node of the rendered output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A node with a value and no children. Without a tag it renders as bare text.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// A node with children and no value of its own.
    Parent {
        tag: Option<String>,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged text.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Adds or replaces an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.set(name, value)
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Children of a parent node; empty for a leaf.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf { .. } => &[],
            HtmlNode::Parent { children, .. } => children,
        }
    }

    /// Serializes this node and everything below it.
    ///
    /// # Errors
    /// Fails on the first node (depth-first, in child order) that cannot be
    /// rendered: a leaf without a value, or a parent without a tag or children.
    pub fn render(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let Some(value) = value else {
                    return Err(RenderError::MissingLeafValue { tag: tag.clone() });
                };
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        open_tag(out, tag, attributes);
                        out.push_str(value);
                        close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let Some(tag) = tag else {
                    return Err(RenderError::MissingParentTag);
                };
                if children.is_empty() {
                    return Err(RenderError::EmptyParentChildren { tag: tag.clone() });
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    attributes.write_html(out);
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_with_tag() {
        assert_eq!(HtmlNode::leaf("p", "Hello, world!").render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn leaf_without_tag_is_bare_text() {
        assert_eq!(HtmlNode::text("Just plain text").render().unwrap(), "Just plain text");
    }

    #[test]
    fn leaf_with_attributes() {
        let node = HtmlNode::leaf("a", "Click me!").with_attribute("href", "https://www.google.com");
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="https://www.google.com">Click me!</a>"#
        );
    }

    #[test]
    fn leaf_without_value_fails() {
        let node = HtmlNode::Leaf {
            tag: Some("p".into()),
            value: None,
            attributes: Attributes::new(),
        };
        assert_eq!(
            node.render(),
            Err(RenderError::MissingLeafValue {
                tag: Some("p".into())
            })
        );
    }

    #[test]
    fn parent_with_grandchildren() {
        let node = HtmlNode::parent(
            "div",
            vec![HtmlNode::parent("span", vec![HtmlNode::leaf("b", "grandchild")])],
        );
        assert_eq!(node.render().unwrap(), "<div><span><b>grandchild</b></span></div>");
    }

    #[test]
    fn parent_mixes_tagged_and_bare_children() {
        let inner = HtmlNode::parent(
            "p",
            vec![HtmlNode::leaf("b", "grandchild1"), HtmlNode::text("grandchild2")],
        );
        let link = HtmlNode::leaf("a", "childnode2").with_attribute("href", "https://google.com");
        let node = HtmlNode::parent("p", vec![link, inner])
            .with_attribute("style", "border: dashed 1px");
        assert_eq!(
            node.render().unwrap(),
            r#"<p style="border: dashed 1px"><a href="https://google.com">childnode2</a><p><b>grandchild1</b>grandchild2</p></p>"#
        );
    }

    #[test]
    fn parent_without_tag_fails() {
        let node = HtmlNode::Parent {
            tag: None,
            children: vec![HtmlNode::text("x")],
            attributes: Attributes::new(),
        };
        assert_eq!(node.render(), Err(RenderError::MissingParentTag));
    }

    #[test]
    fn parent_without_children_fails() {
        assert_eq!(
            HtmlNode::parent("ul", vec![]).render(),
            Err(RenderError::EmptyParentChildren { tag: "ul".into() })
        );
    }

    #[test]
    fn failing_child_fails_the_whole_tree() {
        let node = HtmlNode::parent(
            "div",
            vec![HtmlNode::leaf("b", "fine"), HtmlNode::parent("li", vec![])],
        );
        assert_eq!(
            node.render(),
            Err(RenderError::EmptyParentChildren { tag: "li".into() })
        );
    }

    #[test]
    fn accessors() {
        let node = HtmlNode::parent("ol", vec![HtmlNode::text("a")]).with_attribute("start", "1");
        assert_eq!(node.tag(), Some("ol"));
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.attributes().get("start"), Some("1"));
        assert!(HtmlNode::text("t").children().is_empty());
    }
}
