//! Document records as produced by the content pipeline.
//!
//! Field names follow the pipeline's JSON output (camelCase).

use serde::{Deserialize, Deserializer, Serialize};

/// A single markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Opaque identifier assigned by the pipeline.
    pub id: String,
    /// Short plain-text excerpt of the body.
    #[serde(default)]
    pub excerpt: String,
    /// Headings of the body in document order.
    #[serde(default)]
    pub headings: Vec<Heading>,
    /// Parsed frontmatter.
    #[serde(default)]
    pub frontmatter: Frontmatter,
    /// Derived path fields.
    pub fields: NodeFields,
}

/// Body heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading text.
    pub value: String,
    /// Nesting depth (1-6).
    pub depth: u8,
}

/// Frontmatter fields read by the layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

/// Pipelines emit `null` for frontmatter keys a file does not set.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Path fields derived from the source file location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeFields {
    /// URL path of the page (e.g. `/docs/v2/smart-contracts/factory/`).
    pub slug: String,
    /// Section directory name (e.g. `02-smart-contracts`).
    #[serde(default)]
    pub sub_dir: String,
    /// Source path relative to the pages directory, numeric prefixes kept
    /// (e.g. `/docs/v2/02-smart-contracts/01-factory/`).
    pub raw_slug: String,
}

/// Neighbour reference inside an [`Edge`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingRef {
    #[serde(default)]
    pub frontmatter: Frontmatter,
    pub fields: SiblingFields,
}

/// Path fields of a neighbour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiblingFields {
    pub slug: String,
}

impl SiblingRef {
    /// Create a sibling reference.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            frontmatter: Frontmatter {
                title: title.into(),
            },
            fields: SiblingFields { slug: slug.into() },
        }
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.fields.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }
}

/// A document together with its neighbours in the sorted document list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub node: DocumentNode,
    #[serde(default)]
    pub next: Option<SiblingRef>,
    #[serde(default)]
    pub previous: Option<SiblingRef>,
}

impl DocumentNode {
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.fields.slug
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_edge_from_pipeline_json() {
        let json = r#"{
            "node": {
                "id": "a1",
                "excerpt": "The factory deploys pairs.",
                "headings": [{"value": "createPair", "depth": 2}],
                "frontmatter": {"title": "Factory"},
                "fields": {
                    "slug": "/docs/v2/smart-contracts/factory/",
                    "subDir": "02-smart-contracts",
                    "rawSlug": "/docs/v2/02-smart-contracts/01-factory/"
                }
            },
            "next": {"frontmatter": {"title": "Pair"}, "fields": {"slug": "/docs/v2/smart-contracts/pair/"}},
            "previous": null
        }"#;

        let edge: Edge = serde_json::from_str(json).unwrap();

        assert_eq!(edge.node.slug(), "/docs/v2/smart-contracts/factory/");
        assert_eq!(edge.node.title(), "Factory");
        assert_eq!(edge.node.fields.sub_dir, "02-smart-contracts");
        assert_eq!(
            edge.node.headings,
            vec![Heading {
                value: "createPair".to_owned(),
                depth: 2,
            }]
        );
        assert_eq!(
            edge.next,
            Some(SiblingRef::new("/docs/v2/smart-contracts/pair/", "Pair"))
        );
        assert!(edge.previous.is_none());
    }

    #[test]
    fn test_parse_node_with_missing_optional_fields() {
        let json = r#"{"id": "b2", "fields": {"slug": "/docs/", "rawSlug": "/docs/"}}"#;

        let node: DocumentNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.excerpt, "");
        assert!(node.headings.is_empty());
        assert_eq!(node.title(), "");
        assert_eq!(node.fields.sub_dir, "");
    }

    #[test]
    fn test_parse_null_frontmatter_title() {
        let json = r#"{"frontmatter": {"title": null}, "fields": {"slug": "/docs/v2/"}}"#;

        let sibling: SiblingRef = serde_json::from_str(json).unwrap();

        assert_eq!(sibling.title(), "");
        assert_eq!(sibling.slug(), "/docs/v2/");
    }
}
