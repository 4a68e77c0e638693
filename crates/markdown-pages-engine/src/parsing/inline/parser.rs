use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{
    InlineError,
    kinds::{Delimited, ImageRef, LinkRef},
    types::Span,
};

/// Tokenizes inline text into a sequence of [`Span`]s.
///
/// Runs the bold, italic and code passes, then images, then links. Empty
/// input yields no spans; text without any markup yields one plain span.
///
/// # Errors
/// Fails with [`InlineError::UnterminatedDelimiter`] if any delimited style is
/// left open. No partial result is returned.
pub fn tokenize(text: &str) -> Result<Vec<Span>, InlineError> {
    let mut spans = vec![Span::plain(text)];
    for style in Delimited::PASSES {
        spans = split_delimiter(spans, style)?;
    }
    Ok(split_links(split_images(spans)))
}

/// Splits every plain span on `style`'s delimiter.
///
/// Pieces alternate plain and styled, starting and ending plain. Empty pieces
/// are dropped. Non-plain spans pass through untouched.
pub fn split_delimiter(spans: Vec<Span>, style: Delimited) -> Result<Vec<Span>, InlineError> {
    let delimiter = style.delimiter();
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.content.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(InlineError::UnterminatedDelimiter {
                delimiter,
                text: span.content.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::plain(piece));
            } else {
                out.push(Span::new(piece, style.span_kind()));
            }
        }
    }

    Ok(out)
}

/// Splits `![alt](url)` images out of every plain span.
pub fn split_images(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, image_matches, |alt, url| Span::image(alt, url))
}

/// Splits `[text](url)` links out of every plain span.
pub fn split_links(spans: Vec<Span>) -> Vec<Span> {
    split_references(spans, link_matches, |text, url| Span::link(text, url))
}

/// Returns the `(alt, url)` pair of every image in `text`, in order.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    image_matches(text)
        .into_iter()
        .map(RefMatch::into_pair)
        .collect()
}

/// Returns the `(text, url)` pair of every link in `text`, in order.
///
/// Image syntax is not reported as a link.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    link_matches(text)
        .into_iter()
        .map(RefMatch::into_pair)
        .collect()
}

/// One `[label](url)` occurrence with its byte range in the searched text.
struct RefMatch<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

impl<'a> RefMatch<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let whole = caps.get(0)?;
        Some(Self {
            start: whole.start(),
            end: whole.end(),
            label: caps.get(1)?.as_str(),
            url: caps.get(2)?.as_str(),
        })
    }

    fn into_pair(self) -> (String, String) {
        (self.label.to_string(), self.url.to_string())
    }
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(ImageRef::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(LinkRef::PATTERN).expect("Invalid link regex"))
}

fn image_matches(text: &str) -> Vec<RefMatch<'_>> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| RefMatch::from_captures(&caps))
        .collect()
}

/// Finds links, rejecting any candidate that starts right after `!`.
///
/// The regex crate has no lookbehind, so a rejected candidate restarts the
/// search one byte later, which is where a lookbehind engine would resume.
fn link_matches(text: &str) -> Vec<RefMatch<'_>> {
    let re = link_regex();
    let mut out = vec![];
    let mut at = 0;

    while let Some(caps) = re.captures_at(text, at) {
        let Some(found) = RefMatch::from_captures(&caps) else {
            break;
        };
        if text[..found.start].ends_with(LinkRef::EXCLUDED_PREFIX) {
            // `[` is a single byte, so this stays on a char boundary
            at = found.start + 1;
            continue;
        }
        at = found.end;
        out.push(found);
    }

    out
}

fn split_references(
    spans: Vec<Span>,
    find: fn(&str) -> Vec<RefMatch<'_>>,
    build: fn(&str, &str) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content.as_str();
        let mut rest_start = 0;
        for found in find(text) {
            if found.start > rest_start {
                out.push(Span::plain(&text[rest_start..found.start]));
            }
            out.push(build(found.label, found.url));
            rest_start = found.end;
        }
        if rest_start < text.len() {
            out.push(Span::plain(&text[rest_start..]));
        }
    }

    out
}
