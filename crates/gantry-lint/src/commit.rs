//! Commit model
//!
//! An immutable value object wrapping the segmented message plus metadata.
//! Construction goes through [`CommitSource`]; the hash form is the only
//! path that touches the object store.

use std::path::{Path, PathBuf};

use serde::Serialize;

use gantry_core::Result;
use gantry_git::{GitRepo, Signature};

use crate::segment::{segment, CommitAttributes, TrailerBlock};

/// Where a commit comes from
#[derive(Debug, Clone)]
pub enum CommitSource {
    /// A message string supplied directly by the caller
    Message {
        /// Opaque identifier
        hash: String,
        /// Raw commit message
        message: String,
        /// Author signature, if known
        author: Option<Signature>,
        /// Committer signature, if known
        committer: Option<Signature>,
    },
    /// A hash to look up in a repository's object store
    Hash {
        /// Full or abbreviated commit hash
        hash: String,
        /// Repository location; never defaulted from ambient state
        repo_path: PathBuf,
    },
}

/// An immutable, segmented commit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    hash: String,
    raw: String,
    author: Option<Signature>,
    committer: Option<Signature>,
    subject: String,
    body: Option<String>,
    footer: Option<TrailerBlock>,
    attributes: CommitAttributes,
    #[serde(skip)]
    pub(crate) subject_line: usize,
    #[serde(skip)]
    pub(crate) body_lines: Vec<(usize, String)>,
}

impl Commit {
    /// Construct a commit from the given source
    pub fn load(source: CommitSource) -> Result<Self> {
        match source {
            CommitSource::Message {
                hash,
                message,
                author,
                committer,
            } => Ok(Self::build(hash, message, author, committer)),
            CommitSource::Hash { hash, repo_path } => {
                let repo = GitRepo::discover(&repo_path)?;
                let raw = repo.raw_commit(&hash)?;
                Ok(Self::build(raw.hash, raw.message, raw.author, raw.committer))
            }
        }
    }

    /// Construct a commit from a message string
    pub fn from_message(hash: impl Into<String>, message: impl Into<String>) -> Self {
        Self::build(hash.into(), message.into(), None, None)
    }

    /// Look a commit up by hash in the repository at `repo_path`
    pub fn from_hash(hash: impl Into<String>, repo_path: &Path) -> Result<Self> {
        Self::load(CommitSource::Hash {
            hash: hash.into(),
            repo_path: repo_path.to_path_buf(),
        })
    }

    fn build(
        hash: String,
        message: String,
        author: Option<Signature>,
        committer: Option<Signature>,
    ) -> Self {
        let segmented = segment(&message);

        Self {
            hash,
            raw: message,
            author,
            committer,
            subject: segmented.subject,
            body: segmented.body,
            footer: segmented.footer,
            attributes: segmented.attributes,
            subject_line: segmented.subject_line,
            body_lines: segmented.body_lines,
        }
    }

    /// Commit hash
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// The original message, unmodified
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Author signature, if known
    pub fn author(&self) -> Option<&Signature> {
        self.author.as_ref()
    }

    /// Committer signature, if known
    pub fn committer(&self) -> Option<&Signature> {
        self.committer.as_ref()
    }

    /// First paragraph of the message, trimmed
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Middle paragraphs, if any
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Trailer block, if the final paragraph was one
    pub fn footer(&self) -> Option<&TrailerBlock> {
        self.footer.as_ref()
    }

    /// Whether the subject starts with `fixup!`
    pub fn is_fixup(&self) -> bool {
        self.attributes.is_fixup
    }

    /// Whether the subject looks like a platform-generated merge commit
    pub fn is_merge(&self) -> bool {
        self.attributes.is_merge
    }

    /// 1-based line number of the subject within the raw message
    pub(crate) fn subject_line_number(&self) -> usize {
        self.subject_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature as GitSignature};
    use tempfile::TempDir;

    #[test]
    fn test_from_message() {
        let commit = Commit::from_message("abc123", "feat: add feature\n\nBody text.");
        assert_eq!(commit.hash(), "abc123");
        assert_eq!(commit.subject(), "feat: add feature");
        assert_eq!(commit.body(), Some("Body text."));
        assert!(commit.footer().is_none());
        assert!(commit.author().is_none());
    }

    #[test]
    fn test_value_equality() {
        let a = Commit::from_message("abc", "feat: x");
        let b = Commit::from_message("abc", "feat: x");
        assert_eq!(a, b);

        let c = Commit::from_message("abc", "fix: y");
        assert_ne!(a, c);
    }

    #[test]
    fn test_subject_never_empty_for_nonempty_message() {
        let commit = Commit::from_message("abc", "plain text");
        assert!(!commit.subject().is_empty());
    }

    #[test]
    fn test_from_hash() {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        let sig = GitSignature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let oid = repo
            .commit(Some("HEAD"), &sig, &sig, "feat: from store", &tree, &[])
            .unwrap();

        let commit = Commit::from_hash(oid.to_string(), temp.path()).unwrap();
        assert_eq!(commit.subject(), "feat: from store");
        assert_eq!(commit.author().unwrap().name, "Test");
    }

    #[test]
    fn test_from_hash_not_found() {
        let temp = TempDir::new().unwrap();
        Repository::init(temp.path()).unwrap();

        let missing = "0123456789012345678901234567890123456789";
        let result = Commit::from_hash(missing, temp.path());
        assert!(result.is_err());
    }
}
