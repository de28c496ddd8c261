//! Git types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit author or committer signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Person name
    pub name: String,
    /// Timestamp, normalized to UTC
    pub date: DateTime<Utc>,
}

impl Signature {
    /// Create a new Signature
    pub fn new(name: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }
}

/// A raw commit as read from the object store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Full commit message, unmodified
    pub message: String,
    /// Author signature
    pub author: Option<Signature>,
    /// Committer signature
    pub committer: Option<Signature>,
}

impl RawCommit {
    /// Create a new RawCommit
    pub fn new(hash: impl Into<String>, message: impl Into<String>) -> Self {
        let hash = hash.into();
        let short_hash = hash.chars().take(7).collect();

        Self {
            hash,
            short_hash,
            message: message.into(),
            author: None,
            committer: None,
        }
    }

    /// Set the author signature
    pub fn with_author(mut self, author: Signature) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the committer signature
    pub fn with_committer(mut self, committer: Signature) -> Self {
        self.committer = Some(committer);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_commit() {
        let commit = RawCommit::new("abc1234567890", "feat: add feature");
        assert_eq!(commit.short_hash, "abc1234");
        assert_eq!(commit.message, "feat: add feature");
        assert!(commit.author.is_none());
    }
}
