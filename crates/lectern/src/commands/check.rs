//! `lectern check` command implementation.

use clap::Args;
use lectern_layout::{BuildConfig, StaticSiteBuilder};

use super::{ConfigArgs, load_index, resolve_options};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.config.load(None)?;
        let options = resolve_options(&config);
        let index = load_index(&config)?;

        let mut problems = 0usize;

        for slug in index.duplicate_slugs() {
            output.warning(&format!("Slug shared by several documents: {slug}"));
            problems += 1;
        }

        if index.find_current(&options.nav.root_index).is_none() {
            output.warning(&format!(
                "Landing page {} is not in the index",
                options.nav.root_index
            ));
            problems += 1;
        }

        let builder = StaticSiteBuilder::new(
            index,
            BuildConfig {
                pages_dir: config.docs_resolved.pages_dir.clone(),
                options,
            },
        );
        for slug in builder.missing_sources() {
            output.warning(&format!("No markdown source for {slug}"));
            problems += 1;
        }

        if problems > 0 {
            return Err(CliError::Validation(format!("{problems} problem(s) found")));
        }

        output.success(&format!(
            "{} document(s) checked, no problems found",
            builder.index().edges().len()
        ));
        Ok(())
    }
}
