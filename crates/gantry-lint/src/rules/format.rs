//! Subject-line grammar rules

use crate::commit::Commit;
use crate::diagnostic::Diagnostic;
use crate::fields::{Field, SubjectFields};

use super::{is_noun, LintOptions, Rule};

/// The commit type must be a noun, fields must be separated without stray
/// whitespace, and the `:` separator must be present.
pub struct TypeFormat;

impl Rule for TypeFormat {
    fn id(&self) -> &'static str {
        "type-format"
    }

    fn check(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        _options: &LintOptions,
    ) -> Vec<Diagnostic> {
        let line = commit.subject_line_number();
        let context = subject_first_line(commit);
        let mut out = Vec::new();

        match fields.type_name() {
            None => {
                out.push(
                    Diagnostic::error(
                        self.id(),
                        "commit type is missing",
                        line,
                        fields.commit_type.offset(),
                    )
                    .with_context(context),
                );
            }
            Some(name) if !is_noun(name) => {
                out.push(
                    Diagnostic::error(
                        self.id(),
                        format!("commit type '{}' must be a single word of letters", name),
                        line,
                        fields.commit_type.offset(),
                    )
                    .with_context(context),
                );
            }
            _ => {}
        }

        // No whitespace is allowed between type, scope, breaking marker and
        // separator. The diagnostic points at the gap, not the field.
        for (field, label) in [
            (&fields.commit_type, "commit type"),
            (&fields.scope, "scope"),
            (&fields.breaking, "'!'"),
        ] {
            if let Some(diag) = whitespace_gap(self.id(), field, label, line, commit) {
                out.push(diag);
            }
        }

        if !fields.separator.is_present() {
            out.push(
                Diagnostic::error(
                    self.id(),
                    "missing ':' separator",
                    line,
                    fields.separator.offset(),
                )
                .with_context(subject_first_line(commit)),
            );
        }

        out
    }
}

/// A scope, when present, must be a non-empty single noun.
pub struct ScopeFormat;

impl Rule for ScopeFormat {
    fn id(&self) -> &'static str {
        "scope-format"
    }

    fn check(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        _options: &LintOptions,
    ) -> Vec<Diagnostic> {
        let Some(inner) = fields.scope_name() else {
            return Vec::new();
        };
        let line = commit.subject_line_number();

        if inner.is_empty() {
            return vec![Diagnostic::error(
                self.id(),
                "scope must not be empty",
                line,
                fields.scope.offset(),
            )
            .with_context(subject_first_line(commit))];
        }

        if !is_noun(inner) {
            return vec![Diagnostic::error(
                self.id(),
                format!("scope '{}' must be a single word of letters", inner),
                line,
                fields.scope.offset() + 1,
            )
            .with_context(subject_first_line(commit))];
        }

        Vec::new()
    }
}

/// A separator must be followed by exactly one space and a description.
pub struct DescriptionFormat;

impl Rule for DescriptionFormat {
    fn id(&self) -> &'static str {
        "description-format"
    }

    fn check(
        &self,
        fields: &SubjectFields,
        commit: &Commit,
        _options: &LintOptions,
    ) -> Vec<Diagnostic> {
        let Some(sep_raw) = fields.separator.raw() else {
            return Vec::new();
        };
        let line = commit.subject_line_number();

        if !fields.description.is_present() {
            return vec![Diagnostic::error(
                self.id(),
                "description missing after ':'",
                line,
                fields.description.offset(),
            )
            .with_context(subject_first_line(commit))];
        }

        // Exactly one space between ':' and the description
        let spacing: String = sep_raw.chars().skip(1).collect();
        if spacing != " " {
            let message = if spacing.is_empty() {
                "missing space after ':'"
            } else {
                "expected a single space after ':'"
            };
            return vec![Diagnostic::error(
                self.id(),
                message,
                line,
                fields.separator.offset() + 1,
            )
            .with_context(subject_first_line(commit))
            .with_fix_it(fields.separator.offset() + 1, spacing.chars().count())];
        }

        Vec::new()
    }
}

/// Stray-whitespace check shared by the type/scope/breaking fields
fn whitespace_gap(
    source: &'static str,
    field: &Field,
    label: &str,
    line: usize,
    commit: &Commit,
) -> Option<Diagnostic> {
    let ws = field.trailing_whitespace();
    if ws == 0 {
        return None;
    }

    let gap = field.offset() + field.width() - ws;
    Some(
        Diagnostic::error(
            source,
            format!("unexpected whitespace after {}", label),
            line,
            gap,
        )
        .with_context(subject_first_line(commit))
        .with_fix_it(gap, ws),
    )
}

pub(super) fn subject_first_line(commit: &Commit) -> &str {
    commit.subject().lines().next().unwrap_or("")
}
