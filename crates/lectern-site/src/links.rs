//! Edit links and previous/next navigation.

use serde::Serialize;

use crate::index::SiteMetadata;
use crate::node::{Edge, SiblingRef};

/// Build the "edit on GitHub" URL for a document.
///
/// Produces `<repository>/tree/<commit><edit_prefix><raw_slug>.md` with the
/// trailing slash of `raw_slug` dropped.
///
/// ```
/// use lectern_site::{SiteMetadata, edit_url};
///
/// let meta = SiteMetadata {
///     commit: "abc123".to_owned(),
///     repository: "https://github.com/Uniswap/uniswap-org".to_owned(),
/// };
/// assert_eq!(
///     edit_url(&meta, "/src/pages", "/docs/v2/02-smart-contracts/01-factory/"),
///     "https://github.com/Uniswap/uniswap-org/tree/abc123/src/pages/docs/v2/02-smart-contracts/01-factory.md"
/// );
/// ```
#[must_use]
pub fn edit_url(metadata: &SiteMetadata, edit_prefix: &str, raw_slug: &str) -> String {
    let source = raw_slug.strip_suffix('/').unwrap_or(raw_slug);
    format!(
        "{}/tree/{}{edit_prefix}{source}.md",
        metadata.repository.trim_end_matches('/'),
        metadata.commit
    )
}

/// A navigation link to another page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocsLink {
    pub slug: String,
    pub title: String,
}

impl From<&SiblingRef> for DocsLink {
    fn from(sibling: &SiblingRef) -> Self {
        Self {
            slug: sibling.slug().to_owned(),
            title: sibling.title().to_owned(),
        }
    }
}

/// Rules for the landing page, which sorts last in the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRules {
    /// Slug of the landing page.
    pub root_index: String,
    /// Next link shown on the landing page.
    pub root_next: Option<DocsLink>,
}

impl Default for NavRules {
    fn default() -> Self {
        Self {
            root_index: "/docs/v2/".to_owned(),
            root_next: Some(DocsLink {
                slug: "/docs/v2/smart-contracts/".to_owned(),
                title: "Smart Contracts".to_owned(),
            }),
        }
    }
}

impl NavRules {
    #[must_use]
    pub fn is_root(&self, slug: &str) -> bool {
        slug == self.root_index
    }
}

/// Previous/next links of a page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DocsNav {
    pub previous: Option<DocsLink>,
    pub next: Option<DocsLink>,
}

impl DocsNav {
    /// Derive navigation for the document of `edge`.
    ///
    /// The landing page never links back and gets the configured next link.
    /// Neighbours that are the landing page are dropped.
    #[must_use]
    pub fn for_edge(edge: &Edge, rules: &NavRules) -> Self {
        if rules.is_root(edge.node.slug()) {
            return Self {
                previous: None,
                next: rules.root_next.clone(),
            };
        }

        let keep = |sibling: &&SiblingRef| !rules.is_root(sibling.slug());
        Self {
            previous: edge.previous.as_ref().filter(keep).map(DocsLink::from),
            next: edge.next.as_ref().filter(keep).map(DocsLink::from),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::index::tests::sample_index;

    fn link(slug: &str, title: &str) -> DocsLink {
        DocsLink {
            slug: slug.to_owned(),
            title: title.to_owned(),
        }
    }

    #[test]
    fn test_edit_url() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/smart-contracts/pair/").unwrap();

        assert_eq!(
            edit_url(index.metadata(), "/src/pages", &edge.node.fields.raw_slug),
            "https://github.com/Uniswap/uniswap-org/tree/abc123/src/pages/docs/v2/02-smart-contracts/02-pair.md"
        );
    }

    #[test]
    fn test_edit_url_without_trailing_slash() {
        let meta = SiteMetadata {
            commit: "main".to_owned(),
            repository: "https://github.com/acme/docs/".to_owned(),
        };
        assert_eq!(
            edit_url(&meta, "/content", "/guide/setup"),
            "https://github.com/acme/docs/tree/main/content/guide/setup.md"
        );
    }

    #[test]
    fn test_nav_middle_page() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/smart-contracts/pair/").unwrap();

        let nav = DocsNav::for_edge(edge, &NavRules::default());

        assert_eq!(
            nav,
            DocsNav {
                previous: Some(link("/docs/v2/smart-contracts/factory/", "Factory")),
                next: Some(link("/docs/v2/guides/trading/", "Trading")),
            }
        );
    }

    #[test]
    fn test_nav_first_page_has_no_previous() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/smart-contracts/factory/").unwrap();

        let nav = DocsNav::for_edge(edge, &NavRules::default());

        assert!(nav.previous.is_none());
        assert_eq!(nav.next, Some(link("/docs/v2/smart-contracts/pair/", "Pair")));
    }

    #[test]
    fn test_nav_drops_next_pointing_at_root() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/guides/trading/").unwrap();

        let nav = DocsNav::for_edge(edge, &NavRules::default());

        assert_eq!(nav.previous, Some(link("/docs/v2/smart-contracts/pair/", "Pair")));
        assert!(nav.next.is_none());
    }

    #[test]
    fn test_nav_root_page_uses_configured_next() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/").unwrap();

        let nav = DocsNav::for_edge(edge, &NavRules::default());

        assert!(nav.previous.is_none());
        assert_eq!(
            nav.next,
            Some(link("/docs/v2/smart-contracts/", "Smart Contracts"))
        );
    }

    #[test]
    fn test_nav_root_page_configured_next_replaces_sibling() {
        let index = sample_index();
        let mut edge = index.find_current("/docs/v2/").unwrap().clone();
        edge.next = Some(SiblingRef::new("/docs/v2/guides/trading/", "Trading"));

        let nav = DocsNav::for_edge(&edge, &NavRules::default());

        assert_eq!(
            nav,
            DocsNav {
                previous: None,
                next: Some(link("/docs/v2/smart-contracts/", "Smart Contracts")),
            }
        );
    }

    #[test]
    fn test_nav_root_page_without_configured_next() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/").unwrap();
        let rules = NavRules {
            root_next: None,
            ..NavRules::default()
        };

        let nav = DocsNav::for_edge(edge, &rules);

        assert!(nav.is_empty());
    }

    #[test]
    fn test_nav_drops_previous_pointing_at_root() {
        let index = sample_index();
        let edge = index.find_current("/docs/v2/smart-contracts/factory/").unwrap();
        let mut edge = edge.clone();
        edge.previous = Some(SiblingRef::new("/docs/v2/", "Introduction"));

        let nav = DocsNav::for_edge(&edge, &NavRules::default());

        assert!(nav.previous.is_none());
    }
}
