//! HTML page template for docs pages.
//!
//! Three-column grid: sidebar, content and table of contents, collapsing
//! to a single column below 960px.

use std::fmt::Write;

use lectern_site::{DocsLink, DocsNav, DocsPage, PageHead, Sidebar, TocColumn, TocEntry};

const STYLES: &str = "\
html { background-image: none; }
.docs { display: grid; grid-template-columns: 280px 1fr 160px; justify-content: space-between; \
margin: 2rem 0 4rem; padding: 0 2rem 4rem; border-bottom: 1px solid #e5e7eb; }
.docs-content { min-width: 550px; max-width: 768px; padding: 0; margin-bottom: 3rem; }
.docs-title { display: flex; justify-content: space-between; align-items: center; position: relative; }
.docs-title h1 { font-size: 2.5rem; margin-top: 0; }
.docs-edit { display: inline-flex; align-items: center; font-size: 0.825rem; color: #6b7280; }
.docs-edit svg { width: 16px; margin-right: 6px; }
.docs-nav { display: flex; justify-content: space-between; list-style: none; margin: 2rem 0 0; \
padding: 3rem 0 0; border-top: 1px solid #e5e7eb; }
.docs-nav a { display: flex; flex-direction: column; font-size: 1.25rem; border: 1px solid #e5e7eb; \
border-radius: 0.25rem; padding: 0.5rem 1rem; text-decoration: none; color: inherit; }
.docs-nav a[rel=prev] { align-items: flex-end; }
.docs-nav a[rel=next] { align-items: flex-start; }
.docs-nav small { font-size: 0.75rem; opacity: 0.6; }
.docs-toc-placeholder { width: 160px; height: 60px; }
.docs-toc .toc-nested { margin-left: 0.75rem; }
.docs-sidebar .active { font-weight: 600; }
@media (max-width: 960px) {
  .docs { grid-template-columns: 1fr; margin-top: 0; }
  .docs-content { min-width: 100%; max-width: 100%; }
}
";

const GITHUB_ICON: &str = r#"<svg viewBox="0 0 16 16" aria-hidden="true"><path fill="currentColor" d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z"/></svg>"#;

/// Render a complete HTML document for a resolved page.
///
/// `body_html` is inserted verbatim below the page title.
#[must_use]
pub fn render_page(page: &DocsPage, body_html: &str) -> String {
    let mut html = String::with_capacity(8192 + body_html.len());

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    render_head(&mut html, &page.head);
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"docs\" id=\"docs-header\">\n");
    render_sidebar(&mut html, &page.sidebar);

    html.push_str("<main class=\"docs-content\">\n");
    html.push_str("<div class=\"docs-title\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape(&page.title));
    html.push_str("</div>\n");
    html.push_str(body_html);
    if !body_html.ends_with('\n') {
        html.push('\n');
    }
    if let Some(url) = &page.edit_url {
        let _ = writeln!(
            html,
            "<a class=\"docs-edit\" href=\"{}\">{GITHUB_ICON} Edit on Github</a>",
            escape(url)
        );
    }
    if let Some(nav) = &page.nav {
        render_nav(&mut html, nav);
    }
    html.push_str("</main>\n");

    render_toc(&mut html, &page.toc);

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_head(html: &mut String, head: &PageHead) {
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let full_title = if head.title.is_empty() {
        head.site_title.clone()
    } else {
        format!("{} | {}", head.title, head.site_title)
    };
    let _ = writeln!(html, "<title>{}</title>", escape(&full_title));
    let _ = writeln!(
        html,
        "<meta property=\"og:title\" content=\"{}\">",
        escape(&full_title)
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:site_name\" content=\"{}\">",
        escape(&head.site_title)
    );
    let _ = writeln!(
        html,
        "<meta property=\"og:url\" content=\"{}\">",
        escape(&head.path)
    );
    if let Some(description) = &head.description {
        let _ = writeln!(
            html,
            "<meta name=\"description\" content=\"{}\">",
            escape(description)
        );
    }
    let _ = writeln!(html, "<style>\n{STYLES}</style>");
}

fn render_sidebar(html: &mut String, sidebar: &Sidebar) {
    html.push_str("<aside class=\"docs-sidebar\">\n<nav>\n");
    for group in &sidebar.groups {
        html.push_str("<section>\n");
        if let Some(title) = &group.title {
            let _ = writeln!(html, "<h4>{}</h4>", escape(title));
        }
        html.push_str("<ul>\n");
        for item in &group.items {
            let class = if item.is_active { " class=\"active\"" } else { "" };
            let _ = writeln!(
                html,
                "<li><a href=\"{}\"{class}>{}</a></li>",
                escape(&item.slug),
                escape(&item.title),
            );
        }
        html.push_str("</ul>\n</section>\n");
    }
    html.push_str("</nav>\n</aside>\n");
}

fn render_nav(html: &mut String, nav: &DocsNav) {
    html.push_str("<ul class=\"docs-nav\">\n<li>\n");
    if let Some(previous) = &nav.previous {
        render_nav_link(html, previous, "prev", "Previous");
    }
    html.push_str("</li>\n<li>\n");
    if let Some(next) = &nav.next {
        render_nav_link(html, next, "next", "Next");
    }
    html.push_str("</li>\n</ul>\n");
}

fn render_nav_link(html: &mut String, link: &DocsLink, rel: &str, label: &str) {
    let title = escape(&link.title);
    let text = if rel == "prev" {
        format!("\u{2190} {title}")
    } else {
        format!("{title} \u{2192}")
    };
    let _ = writeln!(
        html,
        "<a href=\"{}\" rel=\"{rel}\"><small>{label}</small><span>{text}</span></a>",
        escape(&link.slug),
    );
}

fn render_toc(html: &mut String, toc: &TocColumn) {
    match toc {
        TocColumn::Entries(entries) => render_toc_entries(html, entries),
        TocColumn::Placeholder => {
            html.push_str("<div class=\"docs-toc-placeholder\"></div>\n");
        }
        TocColumn::Hidden => {}
    }
}

fn render_toc_entries(html: &mut String, entries: &[TocEntry]) {
    html.push_str("<aside class=\"docs-toc\">\n");
    if !entries.is_empty() {
        html.push_str("<ul>\n");
        let top = entries.iter().map(|e| e.level).min().unwrap_or(2);
        for entry in entries {
            let indent = if entry.level > top {
                " class=\"toc-nested\""
            } else {
                ""
            };
            let _ = writeln!(
                html,
                "<li{indent}><a href=\"#{}\">{}</a></li>",
                escape(&entry.id),
                escape(&entry.title),
            );
        }
        html.push_str("</ul>\n");
    }
    html.push_str("</aside>\n");
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
