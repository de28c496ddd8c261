//! Conventional commit aggregation
//!
//! Ties the commit model, field extraction and rule engine together.
//! Validation runs once, synchronously, during construction; the result is
//! immutable afterwards.

use std::path::Path;

use tracing::debug;

use gantry_core::Result;

use crate::commit::{Commit, CommitSource};
use crate::diagnostic::Diagnostic;
use crate::fields::SubjectFields;
use crate::rules::{LintOptions, RuleSet};

/// Footer keys that flag a breaking change. Exact, upper-case match; a
/// miscased key is reported by the case rule instead of being honored.
const BREAKING_KEYS: [&str; 2] = ["BREAKING CHANGE", "BREAKING-CHANGE"];

/// A commit interpreted under the Conventional Commits specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConventionalCommit {
    commit: Commit,
    fields: SubjectFields,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ConventionalCommit {
    /// Interpret and validate an already-constructed commit
    pub fn from_commit(commit: Commit, options: &LintOptions) -> Self {
        let fields = SubjectFields::extract(commit.subject().lines().next().unwrap_or(""));

        let (errors, warnings): (Vec<_>, Vec<_>) = RuleSet::new()
            .validate(&fields, &commit, options)
            .into_iter()
            .partition(Diagnostic::is_error);

        debug!(
            hash = commit.hash(),
            errors = errors.len(),
            warnings = warnings.len(),
            "validated commit"
        );

        Self {
            commit,
            fields,
            errors,
            warnings,
        }
    }

    /// Interpret a commit message supplied as a string
    pub fn from_message(
        hash: impl Into<String>,
        message: impl Into<String>,
        options: &LintOptions,
    ) -> Self {
        Self::from_commit(Commit::from_message(hash, message), options)
    }

    /// Look a commit up by hash and interpret it
    pub fn from_hash(
        hash: impl Into<String>,
        repo_path: &Path,
        options: &LintOptions,
    ) -> Result<Self> {
        let commit = Commit::from_hash(hash, repo_path)?;
        Ok(Self::from_commit(commit, options))
    }

    /// Interpret a commit from any source
    pub fn load(source: CommitSource, options: &LintOptions) -> Result<Self> {
        Ok(Self::from_commit(Commit::load(source)?, options))
    }

    /// The underlying commit
    pub fn commit(&self) -> &Commit {
        &self.commit
    }

    /// Commit type, trimmed
    pub fn type_name(&self) -> Option<&str> {
        self.fields.type_name()
    }

    /// Scope with the parentheses stripped
    pub fn scope(&self) -> Option<&str> {
        self.fields.scope_name()
    }

    /// Description text
    pub fn description(&self) -> Option<&str> {
        self.fields.description_text()
    }

    /// Whether the commit declares a breaking change, via the `!` marker or
    /// an upper-case breaking-change footer. Independent of validity.
    pub fn is_breaking(&self) -> bool {
        if self.fields.has_breaking_marker() {
            return true;
        }
        self.commit
            .footer()
            .is_some_and(|f| BREAKING_KEYS.iter().any(|k| f.contains_key(k)))
    }

    /// True when validation produced no errors
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error diagnostics, in rule order
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// Warning diagnostics, in rule order
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Whether the subject starts with `fixup!`
    pub fn is_fixup(&self) -> bool {
        self.commit.is_fixup()
    }

    /// Whether the subject looks like a platform-generated merge commit
    pub fn is_merge(&self) -> bool {
        self.commit.is_merge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;

    fn check(message: &str) -> ConventionalCommit {
        ConventionalCommit::from_message("abc123", message, &LintOptions::default())
    }

    fn check_with(message: &str, options: &LintOptions) -> ConventionalCommit {
        ConventionalCommit::from_message("abc123", message, options)
    }

    #[test]
    fn test_simple_feat_is_valid() {
        let commit = check("feat: add new feature");
        assert!(commit.is_valid());
        assert_eq!(commit.type_name(), Some("feat"));
        assert_eq!(commit.description(), Some("add new feature"));
        assert!(!commit.is_breaking());
    }

    #[test]
    fn test_breaking_marker() {
        let commit = check("fix!: fix bug with breaking change");
        assert!(commit.is_valid());
        assert!(commit.is_breaking());
    }

    #[test]
    fn test_breaking_footer() {
        let commit = check("feat: add feature\n\nBREAKING CHANGE: api changed");
        assert!(commit.is_valid());
        assert!(commit.is_breaking());
    }

    #[test]
    fn test_miscased_breaking_footer_not_honored() {
        let commit = check("feat: add feature\n\nBreaking-Change: api changed");
        assert!(!commit.is_breaking());
        assert!(!commit.is_valid());
        assert_eq!(commit.errors()[0].source, "breaking-change-case");
    }

    #[test]
    fn test_scoped_commit_with_configured_scopes() {
        let options = LintOptions::default().with_scope("login");
        let commit = check_with("feat(login): add support google oauth (#12)", &options);
        assert!(commit.is_valid());
        assert_eq!(commit.scope(), Some("login"));
    }

    #[test]
    fn test_unknown_type_with_custom_types_is_error() {
        let options = LintOptions::default().with_type("build").with_type("perf");
        let commit = check_with("chore: unknown type", &options);
        assert!(!commit.is_valid());
        assert!(commit.errors()[0]
            .message
            .contains("(feat, fix, build, perf)"));
    }

    #[test]
    fn test_unknown_type_without_custom_types_is_warning() {
        let commit = check("chore: cleanup");
        assert!(commit.is_valid());
        assert_eq!(commit.warnings().len(), 1);
        assert_eq!(commit.warnings()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_fixup_commit_is_invalid() {
        let commit = check("fixup! fixup! some subject");
        assert!(commit.is_fixup());
        assert!(!commit.is_valid());
    }

    #[test]
    fn test_spaced_scope_extracts_but_fails() {
        let commit = check("feat(New York): add subway map");
        assert!(!commit.is_valid());
        assert_eq!(commit.scope(), Some("New York"));
    }

    #[test]
    fn test_multi_line_subject_is_invalid() {
        let commit = check("feat: first\nsecond line of subject");
        assert!(!commit.is_valid());
        assert!(commit
            .errors()
            .iter()
            .any(|d| d.source == "subject-single-line"));
    }

    #[test]
    fn test_breaking_in_body_warns_and_is_not_breaking() {
        let commit = check("feat: x\n\nBREAKING CHANGE: boom\n\ntrailing prose");
        assert!(!commit.is_breaking());
        assert!(commit
            .warnings()
            .iter()
            .any(|d| d.source == "trailer-placement"));
    }

    #[test]
    fn test_diagnostics_preserve_rule_order() {
        // Violates type grammar (whitespace), scope shape and separator
        // spacing at once; order must follow the rule set.
        let commit = check("feat ():desc");
        let sources: Vec<&str> = commit.errors().iter().map(|d| d.source).collect();
        let type_pos = sources.iter().position(|s| *s == "type-format");
        let scope_pos = sources.iter().position(|s| *s == "scope-format");
        let desc_pos = sources.iter().position(|s| *s == "description-format");
        assert!(type_pos < scope_pos);
        assert!(scope_pos < desc_pos);
    }

    #[test]
    fn test_validation_is_idempotent() {
        let options = LintOptions::default().with_type("build");
        let first = check_with("feat (x): y", &options);
        let second = check_with("feat (x): y", &options);
        assert_eq!(first.errors(), second.errors());
        assert_eq!(first.warnings(), second.warnings());
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_commit_still_reports_breaking() {
        let commit = check("feat!:missing space");
        assert!(!commit.is_valid());
        assert!(commit.is_breaking());
    }
}
