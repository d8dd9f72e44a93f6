//! Sidebar navigation built from the content index.

use serde::Serialize;

use crate::index::ContentIndex;
use crate::title::section_title;

/// Sidebar link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarItem {
    pub title: String,
    pub slug: String,
    pub is_active: bool,
}

/// Documents sharing a section directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    /// Display title; `None` for documents outside any section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub items: Vec<SidebarItem>,
}

/// Sidebar for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub groups: Vec<SidebarGroup>,
}

impl Sidebar {
    /// Group every document under `parent` by section, in index order.
    ///
    /// Groups appear in the order their first document appears. The item
    /// whose slug equals `current_path` is marked active.
    #[must_use]
    pub fn build(index: &ContentIndex, parent: &str, current_path: &str) -> Self {
        let mut keys: Vec<&str> = Vec::new();
        let mut groups: Vec<SidebarGroup> = Vec::new();

        for edge in index.docs_under(parent) {
            let sub_dir = edge.node.fields.sub_dir.as_str();
            let slot = if let Some(pos) = keys.iter().position(|&k| k == sub_dir) {
                pos
            } else {
                keys.push(sub_dir);
                groups.push(SidebarGroup {
                    title: (!sub_dir.is_empty()).then(|| section_title(sub_dir)),
                    items: Vec::new(),
                });
                groups.len() - 1
            };

            groups[slot].items.push(SidebarItem {
                title: edge.node.title().to_owned(),
                slug: edge.node.slug().to_owned(),
                is_active: edge.node.slug() == current_path,
            });
        }

        Self { groups }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The active item, if the current page is listed.
    #[must_use]
    pub fn active(&self) -> Option<&SidebarItem> {
        self.groups
            .iter()
            .flat_map(|g| &g.items)
            .find(|item| item.is_active)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::index::tests::sample_index;

    #[test]
    fn test_groups_by_section_in_index_order() {
        let sidebar = Sidebar::build(&sample_index(), "/docs/", "/docs/v2/smart-contracts/pair/");

        let titles: Vec<Option<&str>> = sidebar
            .groups
            .iter()
            .map(|g| g.title.as_deref())
            .collect();
        assert_eq!(titles, vec![Some("Smart Contracts"), Some("Guides"), None]);
        assert_eq!(sidebar.groups[0].items.len(), 2);
        assert_eq!(sidebar.groups[2].items[0].slug, "/docs/v2/");
    }

    #[test]
    fn test_marks_active_item() {
        let sidebar = Sidebar::build(&sample_index(), "/docs/", "/docs/v2/smart-contracts/pair/");

        let active = sidebar.active().unwrap();
        assert_eq!(active.title, "Pair");
        let active_count = sidebar
            .groups
            .iter()
            .flat_map(|g| &g.items)
            .filter(|i| i.is_active)
            .count();
        assert_eq!(active_count, 1);
    }

    #[test]
    fn test_respects_parent_scope() {
        let sidebar = Sidebar::build(&sample_index(), "/docs/v2/guides/", "/docs/v2/");

        assert_eq!(sidebar.groups.len(), 1);
        assert_eq!(sidebar.groups[0].items[0].title, "Trading");
        assert!(sidebar.active().is_none());
    }

    #[test]
    fn test_empty_index() {
        let sidebar = Sidebar::build(&ContentIndex::default(), "/docs/", "/docs/v2/");
        assert!(sidebar.is_empty());
    }
}
