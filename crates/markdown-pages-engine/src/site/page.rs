use crate::document::{ConversionError, extract_title, markdown_to_html};

use super::template::{PageTemplate, rewrite_root_links};

/// Renders one Markdown document into a complete page.
///
/// The title is empty when the document has no `# ` heading.
pub fn generate_page(
    markdown: &str,
    template: &PageTemplate,
    base_path: &str,
) -> Result<String, ConversionError> {
    let content = markdown_to_html(markdown)?;
    let title = extract_title(markdown).unwrap_or_default();
    let page = template.render(&title, &content);
    Ok(rewrite_root_links(&page, base_path))
}
