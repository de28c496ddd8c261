//! Check command

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::load_config_or_default;
use gantry_lint::{ConventionalCommit, LintOptions};

use crate::cli::{output, Cli, OutputFormat};

/// Validate a commit message against the Conventional Commits rules
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Commit hash to check (defaults to HEAD)
    pub hash: Option<String>,

    /// Check a message string instead of a stored commit
    #[arg(long, conflicts_with = "hash")]
    pub message: Option<String>,

    /// Read the message from stdin
    #[arg(long, conflicts_with_all = ["hash", "message"])]
    pub stdin: bool,

    /// Additional accepted commit type (repeatable)
    #[arg(long = "type", value_name = "NAME")]
    pub types: Vec<String>,

    /// Allowed scope (repeatable)
    #[arg(long = "scope", value_name = "NAME")]
    pub scopes: Vec<String>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(
            hash = self.hash.as_deref(),
            from_stdin = self.stdin,
            "executing check command"
        );
        let cwd = std::env::current_dir()?;

        let (config, _config_path) = load_config_or_default(&cwd);
        let mut options = LintOptions::from(&config.lint);
        options.types.extend(self.types.iter().cloned());
        options.scopes.extend(self.scopes.iter().cloned());

        let commit = super::resolve_commit(
            &cwd,
            self.hash.as_deref(),
            self.message.as_deref(),
            self.stdin,
        )?;
        let checked = ConventionalCommit::from_commit(commit, &options);

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "hash": checked.commit().hash(),
                    "valid": checked.is_valid(),
                    "breaking": checked.is_breaking(),
                    "type": checked.type_name(),
                    "scope": checked.scope(),
                    "description": checked.description(),
                    "errors": checked.errors(),
                    "warnings": checked.warnings(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    for diag in checked.errors().iter().chain(checked.warnings()) {
                        output::render_diagnostic(diag);
                    }

                    if checked.is_valid() {
                        if checked.warnings().is_empty() {
                            println!("{}", style("✓ Commit message is valid").green().bold());
                        } else {
                            println!(
                                "{} with {} warning(s)",
                                style("✓ Commit message is valid").green().bold(),
                                checked.warnings().len()
                            );
                        }
                    } else {
                        println!(
                            "{} with {} error(s)",
                            style("✗ Commit message is invalid").red().bold(),
                            checked.errors().len()
                        );
                    }
                }
            }
        }

        if !checked.is_valid() {
            std::process::exit(1);
        }

        Ok(())
    }
}
