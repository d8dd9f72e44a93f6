//! CLI error types.

use std::path::PathBuf;

use lectern_config::ConfigError;
use lectern_layout::BuildError;
use lectern_site::IndexError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("I/O error at {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("{0}")]
    Build(#[from] BuildError),

    #[error("{0}")]
    Validation(String),
}
