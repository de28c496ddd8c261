//! Compliance rules
//!
//! A fixed, ordered set of independent rules. Every rule runs on every
//! commit; nothing short-circuits, so a caller sees all problems at once.
//! Rules are pure: configuration-dependent message text is rendered at
//! validation time, never stored.

mod format;
mod structure;
mod vocabulary;

pub use format::{DescriptionFormat, ScopeFormat, TypeFormat};
pub use structure::{BreakingChangeCase, SubjectSingleLine, TrailerPlacement};
pub use vocabulary::{AllowedScopes, AllowedTypes};

use gantry_core::config::LintConfig;

use crate::commit::Commit;
use crate::diagnostic::Diagnostic;
use crate::fields::SubjectFields;

/// Caller-supplied vocabulary restrictions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintOptions {
    /// Accepted commit types besides `feat` and `fix`, in declaration order
    pub types: Vec<String>,
    /// Allowed scopes; empty accepts any noun-shaped scope
    pub scopes: Vec<String>,
}

impl LintOptions {
    /// Add an accepted commit type
    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.types.push(name.into());
        self
    }

    /// Add an allowed scope
    pub fn with_scope(mut self, name: impl Into<String>) -> Self {
        self.scopes.push(name.into());
        self
    }

    /// The full accepted type vocabulary: `feat` and `fix` plus the
    /// configured types, duplicates dropped, order preserved.
    pub fn effective_types(&self) -> Vec<&str> {
        let mut effective = vec!["feat", "fix"];
        for name in &self.types {
            if !effective.contains(&name.as_str()) {
                effective.push(name);
            }
        }
        effective
    }
}

impl From<&LintConfig> for LintOptions {
    fn from(config: &LintConfig) -> Self {
        Self {
            types: config.types.clone(),
            scopes: config.scopes.clone(),
        }
    }
}

/// A single compliance rule
pub trait Rule: Send + Sync {
    /// Stable identifier, used as the diagnostic source
    fn id(&self) -> &'static str;

    /// Check one commit, returning any findings
    fn check(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        options: &LintOptions,
    ) -> Vec<Diagnostic>;
}

/// The ordered set of built-in rules
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Create the rule set in its canonical order
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(TypeFormat),
                Box::new(ScopeFormat),
                Box::new(DescriptionFormat),
                Box::new(SubjectSingleLine),
                Box::new(BreakingChangeCase),
                Box::new(AllowedScopes),
                Box::new(AllowedTypes),
                Box::new(TrailerPlacement),
            ],
        }
    }

    /// Run every rule, preserving rule order in the output
    pub fn validate(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        options: &LintOptions,
    ) -> Vec<Diagnostic> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(fields, commit, options))
            .collect()
    }

    /// All registered rules
    pub fn all(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A noun in the conventional-commit sense: one whitespace-free token of
/// letters only.
pub(crate) fn is_noun(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order_is_fixed() {
        let set = RuleSet::new();
        let ids: Vec<&str> = set.all().iter().map(|r| r.id()).collect();
        assert_eq!(
            ids,
            vec![
                "type-format",
                "scope-format",
                "description-format",
                "subject-single-line",
                "breaking-change-case",
                "allowed-scopes",
                "allowed-types",
                "trailer-placement",
            ]
        );
    }

    #[test]
    fn test_effective_types_keeps_order_and_dedups() {
        let options = LintOptions::default()
            .with_type("build")
            .with_type("feat")
            .with_type("perf");
        assert_eq!(options.effective_types(), vec!["feat", "fix", "build", "perf"]);
    }

    #[test]
    fn test_is_noun() {
        assert!(is_noun("feat"));
        assert!(is_noun("Refactor"));
        assert!(!is_noun(""));
        assert!(!is_noun("two words"));
        assert!(!is_noun("semi-colon"));
        assert!(!is_noun("v2"));
    }
}
