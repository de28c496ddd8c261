//! Raw commit lookup

use chrono::{TimeZone, Utc};
use git2::Oid;
use tracing::debug;

use gantry_core::error::StoreError;

use crate::repository::{GitRepo, Result};
use crate::types::{RawCommit, Signature};

impl GitRepo {
    /// Fetch a raw commit by hash.
    ///
    /// The hash must be a full or abbreviated hex object id. Returns
    /// `StoreError::InvalidHash` for malformed ids and
    /// `StoreError::CommitNotFound` when no commit with that id exists.
    pub fn raw_commit(&self, hash: &str) -> Result<RawCommit> {
        debug!(hash, "fetching raw commit");

        let oid = if hash.len() == 40 {
            Oid::from_str(hash).map_err(|_| StoreError::InvalidHash {
                hash: hash.to_string(),
            })?
        } else {
            // Abbreviated id: let the odb resolve the prefix
            self.repo
                .revparse_single(hash)
                .map_err(|_| StoreError::CommitNotFound {
                    hash: hash.to_string(),
                })?
                .id()
        };

        let commit = self
            .repo
            .find_commit(oid)
            .map_err(|_| StoreError::CommitNotFound {
                hash: hash.to_string(),
            })?;

        Ok(commit_to_raw(&commit))
    }
}

/// Convert a git2 Commit to RawCommit
fn commit_to_raw(commit: &git2::Commit<'_>) -> RawCommit {
    let message = commit.message().unwrap_or("").to_string();

    RawCommit {
        hash: commit.id().to_string(),
        short_hash: commit.id().to_string().chars().take(7).collect(),
        message,
        author: signature_to_info(&commit.author()),
        committer: signature_to_info(&commit.committer()),
    }
}

/// Convert a git2 Signature, normalizing the timestamp to UTC
fn signature_to_info(sig: &git2::Signature<'_>) -> Option<Signature> {
    let name = sig.name()?.to_string();
    let date = Utc.timestamp_opt(sig.when().seconds(), 0).single()?;
    Some(Signature { name, date })
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature as GitSignature};
    use tempfile::TempDir;

    fn setup_repo_with_commit(message: &str) -> (TempDir, GitRepo, String) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();

        let sig = GitSignature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();

        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        (temp, git_repo, oid.to_string())
    }

    #[test]
    fn test_raw_commit_by_hash() {
        let message = "feat: add file\n\nSome body text.\n";
        let (_temp, repo, hash) = setup_repo_with_commit(message);

        let raw = repo.raw_commit(&hash).unwrap();
        assert_eq!(raw.hash, hash);
        assert_eq!(raw.message, message);
        assert_eq!(raw.author.as_ref().unwrap().name, "Test");
        assert_eq!(raw.committer.as_ref().unwrap().name, "Test");
    }

    #[test]
    fn test_raw_commit_abbreviated_hash() {
        let (_temp, repo, hash) = setup_repo_with_commit("fix: something");

        let raw = repo.raw_commit(&hash[..7]).unwrap();
        assert_eq!(raw.hash, hash);
    }

    #[test]
    fn test_commit_not_found() {
        let (_temp, repo, _hash) = setup_repo_with_commit("fix: something");

        let missing = "0123456789012345678901234567890123456789";
        let result = repo.raw_commit(missing);
        assert!(matches!(result, Err(StoreError::CommitNotFound { .. })));
    }

    #[test]
    fn test_invalid_hash() {
        let (_temp, repo, _hash) = setup_repo_with_commit("fix: something");

        let result = repo.raw_commit("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz");
        assert!(matches!(result, Err(StoreError::InvalidHash { .. })));
    }

    #[test]
    fn test_head_hash() {
        let (_temp, repo, hash) = setup_repo_with_commit("chore: init");
        assert_eq!(repo.head_hash().unwrap(), hash);
    }
}
