//! CLI error types.

use bookgen_config::ConfigError;
use bookgen_tree::{MaterializeError, TreeError};
use bookgen_vcs::GitError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Materialize(#[from] MaterializeError),

    #[error("{0}")]
    Git(#[from] GitError),
}
