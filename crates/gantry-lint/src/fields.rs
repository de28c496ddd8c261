//! Conventional-commit field extraction
//!
//! One structural pattern splits the first subject line into five positional
//! fields. The match never fails; missing pieces become absent fields and
//! the rule engine decides what that means.

use regex::Regex;
use std::sync::LazyLock;

/// Structural split of a subject line. Whitespace after a field is captured
/// with that field so the fields partition the line with no gaps.
static SUBJECT_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[^(!:]*)(?P<scope>\([^)]*\)[ \t]*)?(?P<breaking>![ \t]*)?(?P<separator>:[ \t]*)?(?P<description>.*)$",
    )
    .expect("Invalid regex")
});

/// A positional field within the subject line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    offset: usize,
    raw: Option<String>,
}

impl Field {
    fn new(offset: usize, raw: Option<&str>) -> Self {
        Self {
            offset,
            raw: raw.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    /// 1-based char offset of the field within the subject line.
    ///
    /// Absent fields keep the offset where they would have started, so a
    /// diagnostic can still point at the hole.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The raw captured text, including any trailing whitespace
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Whether anything was captured
    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    /// Captured text with surrounding whitespace removed
    pub fn trimmed(&self) -> Option<&str> {
        self.raw.as_deref().map(str::trim)
    }

    /// Number of chars captured, whitespace included
    pub fn width(&self) -> usize {
        self.raw.as_deref().map_or(0, |s| s.chars().count())
    }

    /// Number of trailing whitespace chars in the capture
    pub fn trailing_whitespace(&self) -> usize {
        self.raw
            .as_deref()
            .map_or(0, |s| s.chars().count() - s.trim_end().chars().count())
    }
}

/// The five positional fields of a conventional-commit subject line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectFields {
    /// Commit type, up to the first `(`, `!` or `:`
    pub commit_type: Field,
    /// Parenthesized scope, if any
    pub scope: Field,
    /// `!` breaking marker, if any
    pub breaking: Field,
    /// `:` separator, if any
    pub separator: Field,
    /// Rest of the line
    pub description: Field,
}

impl SubjectFields {
    /// Extract fields from the first physical line of a subject.
    ///
    /// Purely structural: any input produces a result, including an empty
    /// line (all fields absent, offsets collapsed to 1).
    pub fn extract(first_line: &str) -> Self {
        let caps = SUBJECT_SHAPE
            .captures(first_line)
            .expect("subject shape matches any line");

        let mut offset = 1;
        let mut take = |name: &str| {
            let field = Field::new(offset, caps.name(name).map(|m| m.as_str()));
            offset += field.width();
            field
        };

        Self {
            commit_type: take("type"),
            scope: take("scope"),
            breaking: take("breaking"),
            separator: take("separator"),
            description: take("description"),
        }
    }

    /// Commit type with trailing whitespace removed
    pub fn type_name(&self) -> Option<&str> {
        self.commit_type.trimmed().filter(|s| !s.is_empty())
    }

    /// Scope content with the surrounding parentheses stripped
    pub fn scope_name(&self) -> Option<&str> {
        let raw = self.scope.raw()?;
        let inner = raw.trim_end();
        inner.strip_prefix('(').and_then(|s| s.strip_suffix(')'))
    }

    /// Whether the `!` breaking marker is present
    pub fn has_breaking_marker(&self) -> bool {
        self.breaking.is_present()
    }

    /// Description text, if any
    pub fn description_text(&self) -> Option<&str> {
        self.description.raw()
    }
}
