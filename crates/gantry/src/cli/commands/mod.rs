//! CLI commands

mod check;
mod show;

pub use check::CheckCommand;
pub use show::ShowCommand;

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use gantry_git::GitRepo;
use gantry_lint::Commit;

/// Resolve the commit a command should operate on.
///
/// Priority: explicit message, stdin, then hash lookup (defaulting to the
/// repository HEAD when no hash is given).
pub(crate) fn resolve_commit(
    cwd: &Path,
    hash: Option<&str>,
    message: Option<&str>,
    stdin: bool,
) -> Result<Commit> {
    if let Some(message) = message {
        return Ok(Commit::from_message("(message)", message));
    }

    if stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read message from stdin")?;
        return Ok(Commit::from_message("(stdin)", buffer));
    }

    let hash = match hash {
        Some(hash) => hash.to_string(),
        None => GitRepo::discover(cwd)?.head_hash()?,
    };

    Commit::from_hash(hash, cwd).context("failed to load commit")
}
