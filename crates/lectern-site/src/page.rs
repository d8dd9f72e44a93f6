//! Page resolution.
//!
//! [`DocsPage::resolve`] turns the content index and the current path into
//! the view model rendered by the layout: head metadata, title, edit link,
//! previous/next links, table of contents and sidebar.

use serde::Serialize;

use crate::index::ContentIndex;
use crate::links::{DocsNav, NavRules, edit_url};
use crate::node::Edge;
use crate::sidebar::Sidebar;
use crate::title::section_title;
use crate::toc::{TocEntry, build_toc};

/// Options controlling page resolution.
#[derive(Clone, Debug)]
pub struct ResolveOptions {
    /// Prefix of the head site title.
    pub site_name: String,
    /// Slug prefix of pages listed in the sidebar.
    pub parent: String,
    /// Repository path prepended to raw slugs in edit links.
    pub edit_prefix: String,
    /// Landing page rules for previous/next links.
    pub nav: NavRules,
    /// Shallowest heading depth in the table of contents.
    pub toc_min_depth: u8,
    /// Deepest heading depth in the table of contents.
    pub toc_max_depth: u8,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            site_name: "Uniswap".to_owned(),
            parent: "/docs/".to_owned(),
            edit_prefix: "/src/pages".to_owned(),
            nav: NavRules::default(),
            toc_min_depth: 2,
            toc_max_depth: 3,
        }
    }
}

/// Head metadata of a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageHead {
    /// Page title.
    pub title: String,
    /// Site title, suffixed with the section title when known.
    pub site_title: String,
    /// Description from the document excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Current URL path.
    pub path: String,
}

/// Contents of the table of contents column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "entries", rename_all = "snake_case")]
pub enum TocColumn {
    /// Headings of the current document.
    Entries(Vec<TocEntry>),
    /// No content index was available; keeps the column width.
    Placeholder,
    /// The current path has no document in the index.
    Hidden,
}

/// Everything needed to lay out one docs page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocsPage {
    pub head: PageHead,
    /// Title shown above the body.
    pub title: String,
    /// "Edit on GitHub" link; absent on the landing page.
    pub edit_url: Option<String>,
    /// Previous/next links; absent when the page is not in the index.
    pub nav: Option<DocsNav>,
    pub toc: TocColumn,
    pub sidebar: Sidebar,
}

impl DocsPage {
    /// Resolve the page at `path`.
    ///
    /// `title` is the page's own frontmatter title. Missing data never fails
    /// resolution: without an index the TOC column becomes a placeholder,
    /// and a path without a document renders title and body only.
    #[must_use]
    pub fn resolve(
        index: Option<&ContentIndex>,
        path: &str,
        title: &str,
        options: &ResolveOptions,
    ) -> Self {
        let current = index.and_then(|i| i.find_current(path));
        Self::resolve_current(index, current, path, title, options)
    }

    /// Resolve the page at `path` for an edge already looked up in `index`.
    #[must_use]
    pub fn resolve_current(
        index: Option<&ContentIndex>,
        current: Option<&Edge>,
        path: &str,
        title: &str,
        options: &ResolveOptions,
    ) -> Self {
        let mut head = PageHead {
            title: title.to_owned(),
            site_title: options.site_name.clone(),
            description: None,
            path: path.to_owned(),
        };

        let Some(index) = index else {
            return Self {
                head,
                title: title.to_owned(),
                edit_url: None,
                nav: None,
                toc: TocColumn::Placeholder,
                sidebar: Sidebar::default(),
            };
        };

        let sidebar = Sidebar::build(index, &options.parent, path);

        let Some(edge) = current else {
            tracing::debug!(path = %path, "No document for path");
            return Self {
                head,
                title: title.to_owned(),
                edit_url: None,
                nav: None,
                toc: TocColumn::Hidden,
                sidebar,
            };
        };

        let node = &edge.node;
        let section = section_title(&node.fields.sub_dir);
        if !section.is_empty() {
            head.site_title = format!("{} {section}", options.site_name);
        }
        if !node.excerpt.is_empty() {
            head.description = Some(node.excerpt.clone());
        }

        let edit = (!options.nav.is_root(node.slug()))
            .then(|| edit_url(index.metadata(), &options.edit_prefix, &node.fields.raw_slug));

        Self {
            head,
            title: title.to_owned(),
            edit_url: edit,
            nav: Some(DocsNav::for_edge(edge, &options.nav)),
            toc: TocColumn::Entries(build_toc(
                &node.headings,
                options.toc_min_depth,
                options.toc_max_depth,
            )),
            sidebar,
        }
    }
}
