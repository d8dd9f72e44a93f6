//! Pre-built content index.
//!
//! The index is the JSON result of the content pipeline's query: site
//! metadata plus the sorted document list, each document paired with its
//! previous and next neighbours. It is read once and never mutated by the
//! layout apart from explicit metadata overrides.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::node::Edge;

/// Repository metadata used for edit links.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SiteMetadata {
    /// Commit hash or branch name.
    #[serde(default)]
    pub commit: String,
    /// Repository URL (e.g. `https://github.com/Uniswap/docs`).
    #[serde(default)]
    pub repository: String,
}

/// Error loading the content index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("Failed to read content index {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid content index: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of the query result.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIndex {
    site: RawSite,
    all_mdx: RawEdges,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSite {
    #[serde(default)]
    site_metadata: SiteMetadata,
}

#[derive(Deserialize)]
struct RawEdges {
    #[serde(default)]
    edges: Vec<Edge>,
}

/// Sorted document list with adjacency and site metadata.
#[derive(Clone, Debug, Default)]
pub struct ContentIndex {
    metadata: SiteMetadata,
    edges: Vec<Edge>,
}

impl ContentIndex {
    /// Create an index from already parsed parts.
    #[must_use]
    pub fn new(metadata: SiteMetadata, edges: Vec<Edge>) -> Self {
        Self { metadata, edges }
    }

    /// Parse an index from the pipeline's JSON output.
    ///
    /// The payload may be wrapped in a top-level `data` object.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let value = match value {
            serde_json::Value::Object(mut map) if map.contains_key("data") => {
                map.remove("data").unwrap_or_default()
            }
            other => other,
        };
        let raw: RawIndex = serde_json::from_value(value)?;

        Ok(Self {
            metadata: raw.site.site_metadata,
            edges: raw.all_mdx.edges,
        })
    }

    /// Read and parse an index file.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let json = std::fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            document_count = index.edges.len(),
            "Content index loaded"
        );
        Ok(index)
    }

    /// Replace repository metadata with configured values.
    pub fn override_metadata(&mut self, repository: Option<&str>, commit: Option<&str>) {
        if let Some(repository) = repository {
            repository.clone_into(&mut self.metadata.repository);
        }
        if let Some(commit) = commit {
            commit.clone_into(&mut self.metadata.commit);
        }
    }

    #[must_use]
    pub fn metadata(&self) -> &SiteMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// All edges whose slug equals `path`.
    pub fn matching<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.node.slug() == path)
    }

    /// The edge for the page at `path`.
    ///
    /// Slugs are expected to be unique; when they are not, the first match
    /// wins.
    #[must_use]
    pub fn find_current(&self, path: &str) -> Option<&Edge> {
        let mut matches = self.matching(path);
        let first = matches.next()?;
        let extra = matches.count();
        if extra > 0 {
            tracing::warn!(path = %path, duplicates = extra, "Multiple documents share a slug");
        }
        Some(first)
    }

    /// Edges whose slug lies under `prefix`, in index order.
    pub fn docs_under<'a>(&'a self, prefix: &str) -> impl Iterator<Item = &'a Edge> {
        self.edges
            .iter()
            .filter(move |e| e.node.slug().starts_with(prefix))
    }

    /// Slugs carried by more than one document, sorted.
    #[must_use]
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for edge in &self.edges {
            *counts.entry(edge.node.slug()).or_default() += 1;
        }
        let mut duplicates: Vec<&str> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(slug, _)| slug)
            .collect();
        duplicates.sort_unstable();
        duplicates
    }
}
