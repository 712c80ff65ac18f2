//! `bookgen publish` command implementation.
//!
//! Regenerates the docs tree, then runs the vcs pipeline. Exit policy per
//! outcome: no-changes and commit rejection end the run successfully with a
//! log line; regeneration and push failures propagate as errors.

use std::path::PathBuf;

use bookgen_config::{CliSettings, Config};
use bookgen_vcs::{GitCli, PublishOutcome, PublishRequest, publish};
use clap::Args;

use crate::commands::generate::run_generation;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the publish command.
#[derive(Args)]
pub(crate) struct PublishArgs {
    /// Commit message words, joined with spaces (configured default when empty).
    message: Vec<String>,

    /// Remote to push to (overrides config).
    #[arg(long)]
    remote: Option<String>,

    /// Branch to push (overrides config).
    #[arg(long)]
    branch: Option<String>,

    /// Path to configuration file (default: auto-discover bookgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PublishArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            remote: self.remote.clone(),
            branch: self.branch.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info("Step 1: regenerating the docs tree");
        let report = run_generation(&config, false, &output)?;
        output.info(&format!(
            "Regenerated: {} written, {} skipped",
            report.written.len(),
            report.skipped.len()
        ));

        let message = self.message.join(" ");
        let message = message.trim();
        let message = if message.is_empty() {
            config.publish.default_message.as_str()
        } else {
            message
        };

        output.info("Step 2: publishing to git");
        let git = GitCli::new(&config.root);
        let request = PublishRequest {
            remote: &config.publish.remote,
            branch: &config.publish.branch,
            message,
        };

        match publish(&git, &request)? {
            PublishOutcome::NoChanges => {
                output.info("No changes to publish.");
            }
            PublishOutcome::CommitRejected(err) => {
                output.warning(&format!("Commit failed, nothing pushed: {err}"));
            }
            PublishOutcome::Pushed => {
                output.success(&format!(
                    "Pushed to {}/{}",
                    config.publish.remote, config.publish.branch
                ));
            }
        }
        Ok(())
    }
}
