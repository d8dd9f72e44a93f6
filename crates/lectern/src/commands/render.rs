//! `lectern render` command implementation.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use lectern_layout::{locate_source, render_current};

use super::{ConfigArgs, load_index, resolve_options};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Page path (slug), e.g. `/docs/v2/smart-contracts/`.
    path: String,

    #[command(flatten)]
    config: ConfigArgs,

    /// Markdown source (default: located through the index).
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(None)?;
        let options = resolve_options(&config);

        let index = if config.docs_resolved.index_file.is_file() {
            Some(load_index(&config)?)
        } else {
            output.warning(&format!(
                "Content index not found at {}, rendering without navigation",
                config.docs_resolved.index_file.display()
            ));
            None
        };

        let current = index.as_ref().and_then(|i| i.find_current(&self.path));
        let source_path = self.source.or_else(|| {
            locate_source(
                &config.docs_resolved.pages_dir,
                &current?.node.fields.raw_slug,
            )
        });
        tracing::debug!(path = %self.path, source = ?source_path, "Rendering page");

        let markdown = match &source_path {
            Some(path) => read_markdown(path)?,
            None => {
                output.warning(&format!("No markdown source for {}", self.path));
                String::new()
            }
        };

        let html = render_current(index.as_ref(), current, &self.path, &markdown, &options);

        match self.output {
            Some(path) => {
                fs::write(&path, html).map_err(|source| CliError::File {
                    path: path.clone(),
                    source,
                })?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}

fn read_markdown(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::File {
        path: path.to_path_buf(),
        source,
    })
}
