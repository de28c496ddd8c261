//! Message-structure rules

use regex::Regex;
use std::sync::LazyLock;

use crate::commit::Commit;
use crate::diagnostic::Diagnostic;
use crate::fields::SubjectFields;

use super::{LintOptions, Rule};

/// Leading `Key:` of a trailer-shaped line, allowing the two-word
/// `BREAKING CHANGE` form.
static TRAILER_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<key>[\w-]+(?: [\w-]+)?):").expect("Invalid regex"));

/// The subject must be a single physical line; further content belongs in
/// the body after a blank line.
pub struct SubjectSingleLine;

impl Rule for SubjectSingleLine {
    fn id(&self) -> &'static str {
        "subject-single-line"
    }

    fn check(
        &self,
        _fields: &SubjectFields,
        commit: &Commit,
        _options: &LintOptions,
    ) -> Vec<Diagnostic> {
        let Some(second) = commit.subject().lines().nth(1) else {
            return Vec::new();
        };

        let line = commit.subject_line_number() + 1;
        vec![Diagnostic::error(
            self.id(),
            "subject must be a single line; separate further content with a blank line",
            line,
            1,
        )
        .with_context(second)
        .with_fix_it(1, second.chars().count())]
    }
}

/// Breaking-change trailers must be written in upper-case.
pub struct BreakingChangeCase;

impl Rule for BreakingChangeCase {
    fn id(&self) -> &'static str {
        "breaking-change-case"
    }

    fn check(
        &self,
        _fields: &SubjectFields,
        commit: &Commit,
        _options: &LintOptions,
    ) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        for (i, line) in commit.raw().lines().enumerate() {
            let Some(key) = breaking_key(line) else {
                continue;
            };
            if key.chars().all(|c| !c.is_ascii_lowercase()) {
                continue;
            }
            out.push(
                Diagnostic::error(
                    self.id(),
                    format!(
                        "'{}' must be written as '{}'",
                        key,
                        key.to_ascii_uppercase()
                    ),
                    i + 1,
                    1,
                )
                .with_context(line)
                .with_fix_it(1, key.chars().count()),
            );
        }

        out
    }
}

/// Breaking-change trailers in the body are ignored; they belong in the
/// final paragraph.
pub struct TrailerPlacement;

impl Rule for TrailerPlacement {
    fn id(&self) -> &'static str {
        "trailer-placement"
    }

    fn check(
        &self,
        _fields: &SubjectFields,
        commit: &Commit,
        _options: &LintOptions,
    ) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        for (line_no, text) in &commit.body_lines {
            let Some(key) = breaking_key(text) else {
                continue;
            };
            out.push(
                Diagnostic::warning(
                    self.id(),
                    format!(
                        "'{}' trailer in the body is ignored; move it to the last paragraph",
                        key
                    ),
                    *line_no,
                    1,
                )
                .with_context(text.as_str()),
            );
        }

        out
    }
}

/// The trailer key of `line`, when it is a breaking-change key in any casing
fn breaking_key(line: &str) -> Option<&str> {
    let caps = TRAILER_KEY.captures(line)?;
    let key = caps.name("key")?.as_str();
    if key.eq_ignore_ascii_case("BREAKING CHANGE") || key.eq_ignore_ascii_case("BREAKING-CHANGE") {
        Some(key)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rule: &dyn Rule, message: &str) -> Vec<Diagnostic> {
        let commit = Commit::from_message("abc", message);
        let fields = SubjectFields::extract(commit.subject().lines().next().unwrap_or(""));
        rule.check(&fields, &commit, &LintOptions::default())
    }

    #[test]
    fn test_single_line_subject_passes() {
        assert!(run(&SubjectSingleLine, "feat: one line\n\nBody.").is_empty());
    }

    #[test]
    fn test_multi_line_subject_fails() {
        let diags = run(&SubjectSingleLine, "feat: first line\nsecond line");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 2);
        assert_eq!(diags[0].context, vec!["second line"]);
        assert_eq!(diags[0].fix_it.unwrap().length, 11);
    }

    #[test]
    fn test_uppercase_breaking_trailer_passes() {
        assert!(run(&BreakingChangeCase, "feat: x\n\nBREAKING CHANGE: boom").is_empty());
        assert!(run(&BreakingChangeCase, "feat: x\n\nBREAKING-CHANGE: boom").is_empty());
    }

    #[test]
    fn test_lowercase_breaking_trailer_fails() {
        let diags = run(&BreakingChangeCase, "feat: x\n\nBreaking Change: boom");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 3);
        assert_eq!(
            diags[0].message,
            "'Breaking Change' must be written as 'BREAKING CHANGE'"
        );
        assert_eq!(diags[0].fix_it.unwrap().length, 15);
    }

    #[test]
    fn test_hyphenated_lowercase_breaking_trailer_fails() {
        let diags = run(&BreakingChangeCase, "feat: x\n\nbreaking-change: boom");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_other_trailers_ignored_by_case_rule() {
        assert!(run(&BreakingChangeCase, "feat: x\n\nSigned-off-by: Jo").is_empty());
    }

    #[test]
    fn test_breaking_trailer_in_body_warns() {
        let diags = run(
            &TrailerPlacement,
            "feat: x\n\nBREAKING CHANGE: boom\n\nmore prose here",
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, crate::diagnostic::Severity::Warning);
        assert_eq!(diags[0].line, 3);
    }

    #[test]
    fn test_breaking_trailer_in_footer_does_not_warn() {
        let diags = run(&TrailerPlacement, "feat: x\n\nBREAKING CHANGE: boom");
        assert!(diags.is_empty());
    }
}
