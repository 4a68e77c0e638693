use std::sync::OnceLock;

use regex::{Captures, Regex};

/// An HTML page template with a title and a content placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    source: String,
}

impl PageTemplate {
    pub const TITLE: &'static str = "{{ Title }}";
    pub const CONTENT: &'static str = "{{ Content }}";

    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Fills every placeholder occurrence. The title is substituted first.
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(Self::TITLE, title)
            .replace(Self::CONTENT, content)
    }

    pub fn has_placeholders(&self) -> bool {
        self.source.contains(Self::TITLE) && self.source.contains(Self::CONTENT)
    }
}

/// Prefixes root-relative `href` and `src` values with `base_path`.
///
/// A base path of `/` leaves the page unchanged. A missing trailing slash is
/// added, so `/blog` and `/blog/` behave the same. Protocol-relative values
/// (`//host/...`) are not root-relative and stay as they are.
pub fn rewrite_root_links(html: &str, base_path: &str) -> String {
    let base = normalize_base_path(base_path);
    if base == "/" {
        return html.to_string();
    }
    root_link_regex()
        .replace_all(html, |caps: &Captures| format!("{}=\"{base}{}", &caps[1], &caps[2]))
        .into_owned()
}

fn root_link_regex() -> &'static Regex {
    static ROOT_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    ROOT_LINK_REGEX
        .get_or_init(|| Regex::new(r#"(href|src)="/([^/]|$)"#).expect("Invalid root link regex"))
}

pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim();
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn fills_both_placeholders() {
        let template = PageTemplate::new(
            "<title>{{ Title }}</title><h1>{{ Title }}</h1><main>{{ Content }}</main>",
        );
        assert!(template.has_placeholders());
        assert_eq!(
            template.render("Home", "<p>hi</p>"),
            "<title>Home</title><h1>Home</h1><main><p>hi</p></main>"
        );
    }

    #[test]
    fn missing_placeholder_is_detected() {
        assert!(!PageTemplate::new("<main>{{ Content }}</main>").has_placeholders());
    }

    #[rstest]
    #[case("/", r#"<a href="/about">x</a><img src="/cat.png">"#)]
    #[case("", r#"<a href="/about">x</a><img src="/cat.png">"#)]
    #[case("/blog/", r#"<a href="/blog/about">x</a><img src="/blog/cat.png">"#)]
    #[case("/blog", r#"<a href="/blog/about">x</a><img src="/blog/cat.png">"#)]
    fn rewrites_root_relative_links(#[case] base: &str, #[case] expected: &str) {
        let html = r#"<a href="/about">x</a><img src="/cat.png">"#;
        assert_eq!(rewrite_root_links(html, base), expected);
    }

    #[rstest]
    #[case(r#"<a href="//cdn.example.com/x">x</a>"#, r#"<a href="//cdn.example.com/x">x</a>"#)]
    #[case(r#"<a href="/">home</a>"#, r#"<a href="/blog/">home</a>"#)]
    #[case(
        r#"<img src="//cdn.example.com/a.png"><img src="/b.png">"#,
        r#"<img src="//cdn.example.com/a.png"><img src="/blog/b.png">"#
    )]
    fn rewrites_only_root_relative_values(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(rewrite_root_links(html, "/blog/"), expected);
    }

    #[test]
    fn base_path_is_inserted_literally() {
        let html = r#"<a href="/about">x</a>"#;
        assert_eq!(
            rewrite_root_links(html, "/$1/"),
            r#"<a href="/$1/about">x</a>"#
        );
    }

    #[test]
    fn leaves_absolute_and_relative_links() {
        let html = r#"<a href="https://x.org">x</a><a href="page.html">p</a><script src="//cdn.example.com/x.js"></script>"#;
        assert_eq!(rewrite_root_links(html, "/blog/"), html);
    }
}
