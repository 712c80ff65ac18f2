//! `bookgen generate` command implementation.

use std::path::PathBuf;

use bookgen_config::{CliSettings, Config};
use bookgen_tree::{Materializer, Node, Report};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Environment toggle for force mode; exactly `1` or `true` enables it.
const FORCE_ENV: &str = "BOOKGEN_FORCE";

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Overwrite existing Markdown files.
    #[arg(long)]
    force: bool,

    /// Structure document path (overrides config).
    #[arg(short, long)]
    structure_file: Option<PathBuf>,

    /// Output directory (overrides config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover bookgen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl GenerateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            structure_file: self.structure_file.clone(),
            output_dir: self.output_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let force = self.force || force_from_env();
        let report = run_generation(&config, force, &output)?;

        output.success(&format!(
            "Generated {} files ({} skipped)",
            report.written.len(),
            report.skipped.len()
        ));
        Ok(())
    }
}

/// Materialize the tree described by the loaded configuration.
///
/// Shared with `bookgen publish`, which regenerates before publishing.
pub(crate) fn run_generation(
    config: &Config,
    force: bool,
    output: &Output,
) -> Result<Report, CliError> {
    output.info(&format!(
        "Structure: {}",
        config.docs_resolved.structure_file.display()
    ));
    output.info(&format!(
        "Output: {}",
        config.docs_resolved.output_dir.display()
    ));

    let root = Node::from_file(&config.docs_resolved.structure_file)?;
    let materializer = Materializer::new(&config.docs_resolved.output_dir, force);
    let report = materializer.materialize(&root)?;

    for warning in &report.warnings {
        output.warning(warning);
    }

    Ok(report)
}

/// Check the force-overwrite environment toggle.
fn force_from_env() -> bool {
    std::env::var(FORCE_ENV).is_ok_and(|v| v == "1" || v == "true")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so only one thread ever touches the variable.
    #[test]
    fn test_force_from_env_toggle() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var(FORCE_ENV, "1");
        }
        assert!(force_from_env());

        unsafe {
            std::env::set_var(FORCE_ENV, "true");
        }
        assert!(force_from_env());

        unsafe {
            std::env::set_var(FORCE_ENV, "yes");
        }
        assert!(!force_from_env());

        unsafe {
            std::env::set_var(FORCE_ENV, "TRUE");
        }
        assert!(!force_from_env());

        unsafe {
            std::env::remove_var(FORCE_ENV);
        }
        assert!(!force_from_env());
    }
}
