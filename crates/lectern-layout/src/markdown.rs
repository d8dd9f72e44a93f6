//! Markdown body rendering.
//!
//! Bodies are rendered with pulldown-cmark. Frontmatter is stripped first,
//! and every heading gets an id from [`HeadingIds`] so the table of contents
//! built from the content index links into the body.

use lectern_site::HeadingIds;
use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, TagEnd, html};
use serde::Deserialize;

/// Rendered page body.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderedBody {
    /// Body HTML.
    pub html: String,
    /// Title from the frontmatter, if set.
    pub title: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct BodyFrontmatter {
    #[serde(default)]
    title: Option<String>,
}

/// Render a markdown document, frontmatter included, to HTML.
#[must_use]
pub fn render_markdown(source: &str) -> RenderedBody {
    let (frontmatter, body) = split_frontmatter(source);
    let title = frontmatter.and_then(parse_title);

    let mut events: Vec<Event<'_>> = Parser::new_ext(body, parser_options()).collect();
    let mut ids = HeadingIds::default();
    for i in 0..events.len() {
        if !matches!(events[i], Event::Start(Tag::Heading { .. })) {
            continue;
        }
        let anchor = ids.next_id(&heading_text(&events[i + 1..]));
        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            *id = Some(CowStr::from(anchor));
        }
    }

    let mut out = String::with_capacity(body.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    RenderedBody { html: out, title }
}

fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES
}

/// Plain text of a heading, given the events that follow its start tag.
fn heading_text(events: &[Event<'_>]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            Event::End(TagEnd::Heading(_)) => break,
            Event::Text(t) | Event::Code(t) => text.push_str(t),
            _ => {}
        }
    }
    text
}

/// Split a leading `---` delimited frontmatter block from the body.
fn split_frontmatter(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source
        .strip_prefix("---\n")
        .or_else(|| source.strip_prefix("---\r\n"))
    else {
        return (None, source);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    // Unterminated block: treat the whole file as body.
    (None, source)
}

fn parse_title(frontmatter: &str) -> Option<String> {
    let trimmed = frontmatter.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_yaml::from_str::<BodyFrontmatter>(trimmed) {
        Ok(parsed) => parsed.title,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to parse frontmatter");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_split_frontmatter() {
        let source = "---\ntitle: Pair\n---\n\n# Body\n";
        let (frontmatter, body) = split_frontmatter(source);
        assert_eq!(frontmatter, Some("title: Pair\n"));
        assert_eq!(body, "\n# Body\n");
    }

    #[test]
    fn test_split_frontmatter_crlf() {
        let source = "---\r\ntitle: Pair\r\n---\r\nBody";
        let (frontmatter, body) = split_frontmatter(source);
        assert_eq!(frontmatter, Some("title: Pair\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let (frontmatter, body) = split_frontmatter("# Title\n\n---\n");
        assert!(frontmatter.is_none());
        assert_eq!(body, "# Title\n\n---\n");
    }

    #[test]
    fn test_split_unterminated_frontmatter() {
        let source = "---\ntitle: Pair\n";
        let (frontmatter, body) = split_frontmatter(source);
        assert!(frontmatter.is_none());
        assert_eq!(body, source);
    }

    #[test]
    fn test_render_extracts_title_and_strips_frontmatter() {
        let result = render_markdown("---\ntitle: Pair\ntags: [core]\n---\n\nThe pair contract.\n");

        assert_eq!(result.title.as_deref(), Some("Pair"));
        assert_eq!(result.html, "<p>The pair contract.</p>\n");
    }

    #[test]
    fn test_render_invalid_frontmatter_is_ignored() {
        let result = render_markdown("---\ntitle: [unclosed\n---\nBody\n");

        assert!(result.title.is_none());
        assert_eq!(result.html, "<p>Body</p>\n");
    }

    #[test]
    fn test_render_adds_heading_ids() {
        let result = render_markdown("## Events\n\n### Mint\n\n## Events\n");

        assert_eq!(
            result.html,
            "<h2 id=\"events\">Events</h2>\n<h3 id=\"mint\">Mint</h3>\n<h2 id=\"events-1\">Events</h2>\n"
        );
    }

    #[test]
    fn test_render_heading_id_includes_inline_code() {
        let result = render_markdown("## `getReserves` method\n");

        assert!(result.html.contains("id=\"getreserves-method\""));
    }

    #[test]
    fn test_render_tables() {
        let result = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(result.html.contains("<table>"));
    }
}
