//! Table of contents and heading anchors.
//!
//! Anchors for the table of contents and ids injected into rendered
//! headings come from the same [`HeadingIds`] sequence, so links stay in
//! sync as long as both walk the headings in document order.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::node::Heading;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Convert text to URL-safe slug.
///
/// Converts to lowercase, replaces whitespace/dashes/underscores with single dashes,
/// and removes other non-alphanumeric characters.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            result.extend(c.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    result
}

/// Generates unique heading ids within one document.
#[derive(Debug, Default)]
pub struct HeadingIds {
    counts: HashMap<String, usize>,
    used: HashSet<String>,
}

impl HeadingIds {
    /// Id for the next heading with the given text.
    ///
    /// Repeated slugs get `-1`, `-2`, ... suffixes, skipping any suffix
    /// already taken by another heading. Headings without any alphanumeric
    /// text become `section`.
    pub fn next_id(&mut self, text: &str) -> String {
        let mut base_id = slugify(text);
        if base_id.is_empty() {
            "section".clone_into(&mut base_id);
        }
        let count = self.counts.entry(base_id.clone()).or_default();
        let mut id = match *count {
            0 => base_id.clone(),
            n => format!("{base_id}-{n}"),
        };
        while self.used.contains(&id) {
            *count += 1;
            id = format!("{base_id}-{count}");
        }
        *count += 1;
        self.used.insert(id.clone());
        id
    }
}

/// Build table of contents entries for headings within `min_depth..=max_depth`.
#[must_use]
pub fn build_toc(headings: &[Heading], min_depth: u8, max_depth: u8) -> Vec<TocEntry> {
    let mut ids = HeadingIds::default();
    headings
        .iter()
        .filter_map(|heading| {
            // Every heading consumes an id so suffixes match the body.
            let id = ids.next_id(&heading.value);
            (min_depth..=max_depth)
                .contains(&heading.depth)
                .then(|| TocEntry {
                    level: heading.depth,
                    title: heading.value.trim().to_owned(),
                    id,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn heading(value: &str, depth: u8) -> Heading {
        Heading {
            value: value.to_owned(),
            depth,
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  getReserves()  "), "getreserves");
        assert_eq!(slugify("Flash Swaps -- Overview"), "flash-swaps-overview");
        assert_eq!(slugify("snake_case_name"), "snake-case-name");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn test_heading_ids_deduplicate() {
        let mut ids = HeadingIds::default();
        assert_eq!(ids.next_id("Events"), "events");
        assert_eq!(ids.next_id("Events"), "events-1");
        assert_eq!(ids.next_id("events"), "events-2");
        assert_eq!(ids.next_id("Methods"), "methods");
    }

    #[test]
    fn test_heading_ids_skip_taken_suffix() {
        let mut ids = HeadingIds::default();
        assert_eq!(ids.next_id("Events"), "events");
        assert_eq!(ids.next_id("Events"), "events-1");
        assert_eq!(ids.next_id("Events 1"), "events-1-1");
        assert_eq!(ids.next_id("Events"), "events-2");
    }

    #[test]
    fn test_heading_ids_suffix_after_literal_heading() {
        let mut ids = HeadingIds::default();
        assert_eq!(ids.next_id("Events 1"), "events-1");
        assert_eq!(ids.next_id("Events"), "events");
        assert_eq!(ids.next_id("Events"), "events-2");
    }

    #[test]
    fn test_heading_ids_empty_text() {
        let mut ids = HeadingIds::default();
        assert_eq!(ids.next_id("!!!"), "section");
        assert_eq!(ids.next_id(""), "section-1");
    }

    #[test]
    fn test_build_toc_filters_depth() {
        let headings = vec![
            heading("Pair", 1),
            heading("Events", 2),
            heading("Mint", 3),
            heading("Arguments", 4),
        ];

        let toc = build_toc(&headings, 2, 3);

        assert_eq!(
            toc,
            vec![
                TocEntry {
                    level: 2,
                    title: "Events".to_owned(),
                    id: "events".to_owned(),
                },
                TocEntry {
                    level: 3,
                    title: "Mint".to_owned(),
                    id: "mint".to_owned(),
                },
            ]
        );
    }

    #[test]
    fn test_build_toc_counts_filtered_headings() {
        let headings = vec![
            heading("Arguments", 4),
            heading("Arguments", 2),
        ];

        let toc = build_toc(&headings, 2, 3);

        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].id, "arguments-1");
    }

    #[test]
    fn test_build_toc_empty() {
        assert!(build_toc(&[], 2, 3).is_empty());
    }
}
