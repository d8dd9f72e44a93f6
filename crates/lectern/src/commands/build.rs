//! `lectern build` command implementation.

use std::path::PathBuf;

use clap::Args;
use lectern_layout::{BuildConfig, StaticSiteBuilder};

use super::{ConfigArgs, load_index, resolve_options};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Output directory for the generated pages (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(self.output_dir)?;
        let docs = &config.docs_resolved;

        output.info(&format!("Index: {}", docs.index_file.display()));
        output.info(&format!("Source: {}", docs.pages_dir.display()));
        output.info(&format!("Output: {}", docs.output_dir.display()));

        let index = load_index(&config)?;
        let builder = StaticSiteBuilder::new(
            index,
            BuildConfig {
                pages_dir: docs.pages_dir.clone(),
                options: resolve_options(&config),
            },
        );

        let report = builder.build(&docs.output_dir)?;

        for slug in &report.missing_sources {
            output.warning(&format!("No markdown source for {slug}"));
        }
        output.success(&format!(
            "Built {} page(s) to {}",
            report.pages_written,
            docs.output_dir.display()
        ));
        Ok(())
    }
}
