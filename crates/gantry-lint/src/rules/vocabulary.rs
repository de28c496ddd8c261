//! Configured-vocabulary rules
//!
//! Message text for these rules depends on call-time options, so the
//! allowed-value lists are rendered inside `check`, never cached.

use crate::commit::Commit;
use crate::diagnostic::Diagnostic;
use crate::fields::SubjectFields;

use super::format::subject_first_line;
use super::{is_noun, LintOptions, Rule};

/// When scopes are configured, a present scope must be one of them.
pub struct AllowedScopes;

impl Rule for AllowedScopes {
    fn id(&self) -> &'static str {
        "allowed-scopes"
    }

    fn check(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        options: &LintOptions,
    ) -> Vec<Diagnostic> {
        if options.scopes.is_empty() {
            return Vec::new();
        }
        let Some(scope) = fields.scope_name() else {
            return Vec::new();
        };
        if options.scopes.iter().any(|s| s == scope) {
            return Vec::new();
        }

        vec![Diagnostic::error(
            self.id(),
            format!(
                "scope '{}' is not allowed; allowed scopes: ({})",
                scope,
                options.scopes.join(", ")
            ),
            commit.subject_line_number(),
            fields.scope.offset() + 1,
        )
        .with_context(subject_first_line(commit))]
    }
}

/// The commit type must belong to the accepted vocabulary.
///
/// `feat` and `fix` are always accepted. With caller-configured types the
/// vocabulary is closed and violations are errors; without, anything
/// noun-shaped merely warns.
pub struct AllowedTypes;

impl Rule for AllowedTypes {
    fn id(&self) -> &'static str {
        "allowed-types"
    }

    fn check(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        options: &LintOptions,
    ) -> Vec<Diagnostic> {
        // Grammar problems are type-format's concern; only a present,
        // noun-shaped type is judged against the vocabulary.
        let Some(name) = fields.type_name() else {
            return Vec::new();
        };
        if !is_noun(name) {
            return Vec::new();
        }

        let effective = options.effective_types();
        if effective.iter().any(|t| *t == name) {
            return Vec::new();
        }

        let message = format!(
            "commit type '{}' is not allowed; allowed types: ({})",
            name,
            effective.join(", ")
        );
        let line = commit.subject_line_number();
        let column = fields.commit_type.offset();

        let diag = if options.types.is_empty() {
            Diagnostic::warning(self.id(), message, line, column)
        } else {
            Diagnostic::error(self.id(), message, line, column)
        };
        vec![diag.with_context(subject_first_line(commit))]
    }
}
