//! Show command

use clap::Args;
use console::style;
use tracing::info;

use gantry_core::config::load_config_or_default;
use gantry_lint::{ConventionalCommit, LintOptions};

use crate::cli::{output, Cli, OutputFormat};

/// Show the parsed structure of a commit message
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Commit hash to show (defaults to HEAD)
    pub hash: Option<String>,

    /// Parse a message string instead of a stored commit
    #[arg(long, conflicts_with = "hash")]
    pub message: Option<String>,

    /// Read the message from stdin
    #[arg(long, conflicts_with_all = ["hash", "message"])]
    pub stdin: bool,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(hash = self.hash.as_deref(), "executing show command");
        let cwd = std::env::current_dir()?;

        let (config, _config_path) = load_config_or_default(&cwd);
        let options = LintOptions::from(&config.lint);

        let commit = super::resolve_commit(
            &cwd,
            self.hash.as_deref(),
            self.message.as_deref(),
            self.stdin,
        )?;
        let parsed = ConventionalCommit::from_commit(commit, &options);

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "commit": parsed.commit(),
                    "type": parsed.type_name(),
                    "scope": parsed.scope(),
                    "description": parsed.description(),
                    "breaking": parsed.is_breaking(),
                    "valid": parsed.is_valid(),
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    let commit = parsed.commit();
                    println!("{}", style("Commit").bold());
                    println!("{}", output::key_value("hash", commit.hash()));
                    println!("{}", output::key_value("subject", commit.subject()));
                    if let Some(author) = commit.author() {
                        println!("{}", output::key_value("author", &author.name));
                    }
                    if let Some(body) = commit.body() {
                        println!("{}", output::key_value("body", body));
                    }
                    if let Some(footer) = commit.footer() {
                        for trailer in footer.iter() {
                            println!("{}", output::key_value(&trailer.key, &trailer.value));
                        }
                    }

                    println!();
                    println!("{}", style("Conventional").bold());
                    println!(
                        "{}",
                        output::key_value("type", parsed.type_name().unwrap_or("-"))
                    );
                    println!(
                        "{}",
                        output::key_value("scope", parsed.scope().unwrap_or("-"))
                    );
                    println!(
                        "{}",
                        output::key_value("breaking", &parsed.is_breaking().to_string())
                    );
                    println!(
                        "{}",
                        output::key_value("fixup", &parsed.is_fixup().to_string())
                    );
                    println!(
                        "{}",
                        output::key_value("merge", &parsed.is_merge().to_string())
                    );
                    println!(
                        "{}",
                        output::key_value("valid", &parsed.is_valid().to_string())
                    );
                }
            }
        }

        Ok(())
    }
}
