//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod render;

use std::path::PathBuf;

use clap::Args;
use lectern_config::{CliSettings, Config};
use lectern_site::{ContentIndex, DocsLink, NavRules, ResolveOptions};

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use render::RenderArgs;

/// Configuration flags shared by all commands.
#[derive(Args)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content index JSON file (overrides config).
    #[arg(long)]
    index_file: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(long)]
    pages_dir: Option<PathBuf>,

    /// Repository URL for edit links (overrides config and index).
    #[arg(long, env = "LECTERN_REPOSITORY")]
    repository: Option<String>,

    /// Commit for edit links (overrides config and index).
    #[arg(long, env = "LECTERN_COMMIT")]
    commit: Option<String>,
}

impl ConfigArgs {
    /// Load configuration with these flags applied.
    pub(crate) fn load(&self, output_dir: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            index_file: self.index_file.clone(),
            pages_dir: self.pages_dir.clone(),
            output_dir,
            repository: self.repository.clone(),
            commit: self.commit.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config = ?config.config_path, "Configuration loaded");
        Ok(config)
    }
}

/// Load the content index with configured metadata overrides applied.
pub(crate) fn load_index(config: &Config) -> Result<ContentIndex, CliError> {
    let mut index = ContentIndex::load(&config.docs_resolved.index_file)?;
    if config.site.repository.is_some() || config.site.commit.is_some() {
        tracing::debug!("Overriding index repository metadata from configuration");
    }
    index.override_metadata(
        config.site.repository.as_deref(),
        config.site.commit.as_deref(),
    );
    Ok(index)
}

/// Page resolution options from configuration.
pub(crate) fn resolve_options(config: &Config) -> ResolveOptions {
    let docs = &config.docs_resolved;
    ResolveOptions {
        site_name: config.site.name.clone(),
        parent: docs.parent.clone(),
        edit_prefix: docs.edit_prefix.clone(),
        nav: NavRules {
            root_index: docs.root_index.clone(),
            root_next: docs.root_next.as_ref().map(|next| DocsLink {
                slug: next.slug.clone(),
                title: next.title.clone(),
            }),
        },
        toc_min_depth: config.toc.min_depth,
        toc_max_depth: config.toc.max_depth,
    }
}
