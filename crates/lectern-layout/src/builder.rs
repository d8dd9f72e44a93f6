//! Static site builder.
//!
//! Renders every document under the configured parent slug to
//! `<output_dir><slug>index.html`, reading markdown sources from the pages
//! directory at the location encoded in each document's raw slug.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use lectern_site::{ContentIndex, ResolveOptions};

use crate::document::render_current;

/// Configuration for static site building.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Directory holding the markdown sources.
    pub pages_dir: PathBuf,
    /// Page resolution options.
    pub options: ResolveOptions,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No document with slug {0}")]
    PageNotFound(String),
    #[error("Slug escapes the output directory: {0}")]
    InvalidSlug(String),
}

/// Outcome of a build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of pages written.
    pub pages_written: usize,
    /// Slugs rendered with an empty body because no source was found.
    pub missing_sources: Vec<String>,
}

/// Builds a static documentation site from a content index.
pub struct StaticSiteBuilder {
    index: ContentIndex,
    config: BuildConfig,
}

impl StaticSiteBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new(index: ContentIndex, config: BuildConfig) -> Self {
        Self { index, config }
    }

    #[must_use]
    pub fn index(&self) -> &ContentIndex {
        &self.index
    }

    /// Locate the markdown source of a document in the pages directory.
    #[must_use]
    pub fn source_path(&self, raw_slug: &str) -> Option<PathBuf> {
        locate_source(&self.config.pages_dir, raw_slug)
    }

    /// Slugs under the parent whose source file cannot be found.
    #[must_use]
    pub fn missing_sources(&self) -> Vec<&str> {
        self.index
            .docs_under(&self.config.options.parent)
            .filter(|edge| self.source_path(&edge.node.fields.raw_slug).is_none())
            .map(|edge| edge.node.slug())
            .collect()
    }

    /// Render a single page.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::PageNotFound` if no document has slug `path`,
    /// or `BuildError::Io` if its source cannot be read.
    pub fn render(&self, path: &str) -> Result<String, BuildError> {
        let edge = self
            .index
            .find_current(path)
            .ok_or_else(|| BuildError::PageNotFound(path.to_owned()))?;
        let markdown = self.read_source(&edge.node.fields.raw_slug)?;
        Ok(render_current(
            Some(&self.index),
            Some(edge),
            path,
            markdown.as_deref().unwrap_or_default(),
            &self.config.options,
        ))
    }

    /// Render every document under the parent slug into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns `BuildError::Io` on read or write failures, or
    /// `BuildError::InvalidSlug` for slugs containing `..`.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, BuildError> {
        let mut report = BuildReport::default();
        let mut seen = HashSet::new();

        for edge in self.index.docs_under(&self.config.options.parent) {
            let slug = edge.node.slug();
            if !seen.insert(slug) {
                continue;
            }

            let target = output_path(output_dir, slug)?;
            let markdown = self.read_source(&edge.node.fields.raw_slug)?;
            if markdown.is_none() {
                tracing::warn!(slug = %slug, "Markdown source not found, rendering empty body");
                report.missing_sources.push(slug.to_owned());
            }

            let html = render_current(
                Some(&self.index),
                Some(edge),
                slug,
                markdown.as_deref().unwrap_or_default(),
                &self.config.options,
            );

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|source| BuildError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&target, html).map_err(|source| BuildError::Io {
                path: target.clone(),
                source,
            })?;
            tracing::debug!(slug = %slug, path = %target.display(), "Page written");
            report.pages_written += 1;
        }

        tracing::info!(
            pages = report.pages_written,
            missing = report.missing_sources.len(),
            "Site build completed"
        );
        Ok(report)
    }

    fn read_source(&self, raw_slug: &str) -> Result<Option<String>, BuildError> {
        let Some(path) = self.source_path(raw_slug) else {
            return Ok(None);
        };
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| BuildError::Io { path, source })
    }
}

/// Locate the markdown source for a raw slug.
///
/// `/a/b/` maps to `<pages_dir>/a/b.md`, falling back to
/// `<pages_dir>/a/b/index.md`. Slugs with `.` or `..` segments never match.
#[must_use]
pub fn locate_source(pages_dir: &Path, raw_slug: &str) -> Option<PathBuf> {
    if has_relative_segment(raw_slug) {
        tracing::warn!(raw_slug = %raw_slug, "Ignoring source slug outside the pages directory");
        return None;
    }
    let trimmed = raw_slug.trim_matches('/');
    let mut candidates = Vec::with_capacity(2);
    if !trimmed.is_empty() {
        candidates.push(pages_dir.join(format!("{trimmed}.md")));
    }
    candidates.push(pages_dir.join(trimmed).join("index.md"));
    candidates.into_iter().find(|p| p.is_file())
}

/// Output file for a slug: `/a/b/` becomes `<output_dir>/a/b/index.html`.
fn output_path(output_dir: &Path, slug: &str) -> Result<PathBuf, BuildError> {
    if has_relative_segment(slug) {
        return Err(BuildError::InvalidSlug(slug.to_owned()));
    }
    let mut path = output_dir.to_path_buf();
    path.extend(slug.split('/').filter(|s| !s.is_empty()));
    path.push("index.html");
    Ok(path)
}

fn has_relative_segment(slug: &str) -> bool {
    slug.split('/').any(|segment| segment == ".." || segment == ".")
}
