//! Lint diagnostics
//!
//! Plain-data diagnostics with enough positional information for a renderer
//! to draw carets and for tooling to apply fixes. Color and formatting are a
//! presentation concern layered on top, never part of this data.

use serde::Serialize;

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The commit violates a requirement and is invalid
    Error,
    /// The commit is valid but something looks off
    Warning,
}

/// A machine-applicable edit span: `length` chars starting at 1-based char
/// column `index` on the diagnostic's line. A zero length marks an
/// insertion point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FixIt {
    /// 1-based char column on the diagnostic's line
    pub index: usize,
    /// Span length in chars
    pub length: usize,
}

/// A single finding produced by the rule engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Identifier of the rule that produced this diagnostic
    pub source: &'static str,
    /// Human-readable message, ANSI-free
    pub message: String,
    /// 1-based line within the raw commit message
    pub line: usize,
    /// 1-based char column within that line
    pub column: usize,
    /// The source line(s) the diagnostic points at
    pub context: Vec<String>,
    /// Optional suggested edit
    pub fix_it: Option<FixIt>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(source: &'static str, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            severity: Severity::Error,
            source,
            message: message.into(),
            line,
            column,
            context: Vec::new(),
            fix_it: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(
        source: &'static str,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            source,
            message: message.into(),
            line,
            column,
            context: Vec::new(),
            fix_it: None,
        }
    }

    /// Attach a context line
    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    /// Attach a fix-it span
    pub fn with_fix_it(mut self, index: usize, length: usize) -> Self {
        self.fix_it = Some(FixIt { index, length });
        self
    }

    /// Whether this diagnostic is an error
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructor() {
        let diag = Diagnostic::error("type-format", "missing ':' separator", 1, 5);
        assert!(diag.is_error());
        assert_eq!(diag.source, "type-format");
        assert_eq!(diag.line, 1);
        assert_eq!(diag.column, 5);
        assert!(diag.fix_it.is_none());
    }

    #[test]
    fn test_builder_helpers() {
        let diag = Diagnostic::warning("trailer-placement", "ignored trailer", 4, 1)
            .with_context("BREAKING CHANGE: oops")
            .with_fix_it(1, 15);
        assert!(!diag.is_error());
        assert_eq!(diag.context, vec!["BREAKING CHANGE: oops"]);
        assert_eq!(diag.fix_it, Some(FixIt { index: 1, length: 15 }));
    }
}
