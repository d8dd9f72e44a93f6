//! Single page rendering: markdown body plus layout.

use lectern_site::{ContentIndex, DocsPage, Edge, ResolveOptions};

use crate::markdown::render_markdown;
use crate::template::render_page;

/// Render the page at `path` from its markdown source.
///
/// The page title comes from the source frontmatter, falling back to the
/// title recorded in the index.
#[must_use]
pub fn render_document(
    index: Option<&ContentIndex>,
    path: &str,
    markdown: &str,
    options: &ResolveOptions,
) -> String {
    let current = index.and_then(|i| i.find_current(path));
    render_current(index, current, path, markdown, options)
}

/// Like [`render_document`], for an edge already looked up in `index`.
#[must_use]
pub fn render_current(
    index: Option<&ContentIndex>,
    current: Option<&Edge>,
    path: &str,
    markdown: &str,
    options: &ResolveOptions,
) -> String {
    let body = render_markdown(markdown);
    let title = body
        .title
        .as_deref()
        .or_else(|| current.map(|edge| edge.node.title()))
        .unwrap_or_default();

    let page = DocsPage::resolve_current(index, current, path, title, options);
    render_page(&page, &body.html)
}
