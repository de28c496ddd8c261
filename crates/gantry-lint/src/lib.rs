//! Gantry Lint - Commit message parsing and Conventional Commits validation
//!
//! This crate segments raw commit messages into subject, body and footer,
//! re-parses the subject into positional conventional-commit fields, and
//! runs an ordered rule set producing positionally-accurate diagnostics.
//! Parsing never fails; malformed input surfaces as diagnostics instead.

pub mod commit;
pub mod conventional;
pub mod diagnostic;
pub mod fields;
pub mod rules;
pub mod segment;

pub use commit::{Commit, CommitSource};
pub use conventional::ConventionalCommit;
pub use diagnostic::{Diagnostic, FixIt, Severity};
pub use fields::{Field, SubjectFields};
pub use rules::{LintOptions, Rule, RuleSet};
pub use segment::{segment, CommitAttributes, Trailer, TrailerBlock};
