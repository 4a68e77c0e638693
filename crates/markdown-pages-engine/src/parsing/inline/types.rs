/// The kind of an inline span.
///
/// Link and image targets live on their variants, so a target exists exactly
/// when the kind needs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpanKind {
    /// Text with no formatting.
    Plain,
    /// `**bold**`
    Bold,
    /// `_italic_`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](url)`
    Link {
        /// The link target (`href`).
        url: String,
    },
    /// `![alt](url)`
    Image {
        /// The image source (`src`).
        url: String,
    },
}

/// A typed fragment of inline text.
///
/// For images `content` holds the alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub kind: SpanKind,
}

impl Span {
    pub fn new(content: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            content: content.into(),
            kind,
        }
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Plain)
    }

    pub fn bold(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Bold)
    }

    pub fn italic(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Italic)
    }

    pub fn code(content: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Code)
    }

    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(content, SpanKind::Link { url: url.into() })
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(alt, SpanKind::Image { url: url.into() })
    }

    /// Whether later tokenizing passes may still split this span.
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SpanKind::Plain)
    }

    /// The URL of a link or image span.
    pub fn target(&self) -> Option<&str> {
        match &self.kind {
            SpanKind::Link { url } | SpanKind::Image { url } => Some(url),
            SpanKind::Plain | SpanKind::Bold | SpanKind::Italic | SpanKind::Code => None,
        }
    }
}
