//! Message segmentation
//!
//! Splits a raw commit message into subject, body and footer without ever
//! failing. Malformed input still produces a best-effort result; compliance
//! problems are reported later by the rule engine, not here.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// A line that starts a new trailer entry: `Key: value`, `Key #ref`,
/// or the spec-blessed `BREAKING CHANGE: value` form.
static TRAILER_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<bc_key>(?i:BREAKING CHANGE)):(?P<bc_val>.*)|(?P<key>[\w-]+):(?P<val>.*)|(?P<ref_key>[\w-]+) #(?P<ref_val>.*))$",
    )
    .expect("Invalid regex")
});

/// Merge-commit subjects generated by common hosting platforms
static MERGE_SUBJECTS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // GitHub
        r"^Merge pull request #\d+ from .+",
        // git / GitLab
        r"^Merge branch '.+'",
        r"^Merge branch .+ into .+",
        r"^Merge remote-tracking branch '.+'",
        // Bitbucket
        r"^Merged in .+ \(pull request #\d+\)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid regex"))
    .collect()
});

/// Result of segmenting a raw commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    /// First paragraph, trimmed
    pub subject: String,
    /// Middle paragraphs, outer whitespace trimmed, interior blank lines kept
    pub body: Option<String>,
    /// Trailer block parsed from the final paragraph, when it is one
    pub footer: Option<TrailerBlock>,
    /// Behavioral attributes derived from the subject
    pub attributes: CommitAttributes,
    /// 1-based line number of the subject within the raw message
    pub(crate) subject_line: usize,
    /// Body lines with their 1-based line numbers within the raw message
    pub(crate) body_lines: Vec<(usize, String)>,
}

/// Behavioral attributes of a commit subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CommitAttributes {
    /// Subject starts with `fixup!`
    pub is_fixup: bool,
    /// Subject matches a platform-generated merge commit
    pub is_merge: bool,
}

/// A single footer trailer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trailer {
    /// Trailer key, exactly as written
    pub key: String,
    /// Trailer value; continuation lines are newline-joined
    pub value: String,
}

/// Ordered trailer key/value mapping.
///
/// Keys keep their first-occurrence position; a repeated key overwrites the
/// earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrailerBlock {
    entries: Vec<Trailer>,
}

impl TrailerBlock {
    /// Insert or overwrite a trailer
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|t| t.key == key) {
            Some(existing) => existing.value = value,
            None => self.entries.push(Trailer { key, value }),
        }
    }

    /// Look up a trailer value by exact key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.value.as_str())
    }

    /// Check whether an exact key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|t| t.key == key)
    }

    /// Iterate trailers in order
    pub fn iter(&self) -> impl Iterator<Item = &Trailer> {
        self.entries.iter()
    }

    /// Number of trailers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the block has no trailers
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Segment a raw commit message into subject, body, footer and attributes.
///
/// Comment lines (`#`-prefixed) are dropped before anything else. Paragraphs
/// are split on runs of blank lines; the first is the subject and only the
/// last is ever considered for footer extraction.
pub fn segment(message: &str) -> Segmented {
    // Keep original line numbers so diagnostics can point into the raw text.
    let lines: Vec<(usize, &str)> = message
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.starts_with('#'))
        .collect();

    let paragraphs = paragraph_ranges(&lines);

    if paragraphs.is_empty() {
        return Segmented {
            subject: String::new(),
            body: None,
            footer: None,
            attributes: CommitAttributes::default(),
            subject_line: 1,
            body_lines: Vec::new(),
        };
    }

    let (subj_start, subj_end) = paragraphs[0];
    let subject = lines[subj_start..subj_end]
        .iter()
        .map(|(_, l)| *l)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();
    let subject_line = lines[subj_start].0;

    // Only the final paragraph may be a footer, and only when every line
    // of it is trailer-shaped.
    let mut footer = None;
    let mut body_end = lines.len();
    if paragraphs.len() > 1 {
        let (last_start, last_end) = paragraphs[paragraphs.len() - 1];
        let last: Vec<&str> = lines[last_start..last_end].iter().map(|(_, l)| *l).collect();
        if is_footer_paragraph(&last) {
            footer = Some(parse_trailers(&last));
            body_end = last_start;
        }
    }

    // Everything between subject and footer is body, interior blanks intact.
    let mut body_lines: Vec<(usize, String)> = lines[subj_end..body_end]
        .iter()
        .map(|(n, l)| (*n, l.to_string()))
        .collect();
    while body_lines.first().is_some_and(|(_, l)| l.trim().is_empty()) {
        body_lines.remove(0);
    }
    while body_lines.last().is_some_and(|(_, l)| l.trim().is_empty()) {
        body_lines.pop();
    }

    let body = if body_lines.is_empty() {
        None
    } else {
        Some(
            body_lines
                .iter()
                .map(|(_, l)| l.as_str())
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string(),
        )
    };

    let attributes = CommitAttributes {
        is_fixup: subject.to_lowercase().starts_with("fixup!"),
        is_merge: MERGE_SUBJECTS.iter().any(|p| p.is_match(&subject)),
    };

    Segmented {
        subject,
        body,
        footer,
        attributes,
        subject_line,
        body_lines,
    }
}

/// Check whether a line starts a trailer entry, returning `(key, value)`
pub(crate) fn trailer_start(line: &str) -> Option<(String, String)> {
    let caps = TRAILER_START.captures(line)?;
    if let Some(key) = caps.name("bc_key") {
        let val = caps.name("bc_val").map_or("", |m| m.as_str());
        Some((key.as_str().to_string(), val.trim().to_string()))
    } else if let Some(key) = caps.name("key") {
        let val = caps.name("val").map_or("", |m| m.as_str());
        Some((key.as_str().to_string(), val.trim().to_string()))
    } else {
        let key = caps.name("ref_key")?;
        let val = caps.name("ref_val").map_or("", |m| m.as_str());
        Some((key.as_str().to_string(), format!("#{}", val)))
    }
}

/// Paragraph boundaries over the comment-stripped lines, as half-open ranges
fn paragraph_ranges(lines: &[(usize, &str)]) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = None;

    for (i, (_, line)) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                ranges.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        ranges.push((s, lines.len()));
    }
    ranges
}

/// A paragraph is a footer iff it opens with a trailer line and every other
/// line is either a trailer line or an indented, non-empty continuation.
fn is_footer_paragraph(lines: &[&str]) -> bool {
    let Some(first) = lines.first() else {
        return false;
    };
    if trailer_start(first).is_none() {
        return false;
    }

    lines.iter().all(|line| {
        trailer_start(line).is_some()
            || (!line.trim().is_empty()
                && line.starts_with(|c: char| c == ' ' || c == '\t'))
    })
}

/// Parse a footer paragraph into its trailer block
fn parse_trailers(lines: &[&str]) -> TrailerBlock {
    let mut block = TrailerBlock::default();
    let mut current: Option<(String, String)> = None;

    for line in lines {
        if let Some((key, value)) = trailer_start(line) {
            if let Some((k, v)) = current.take() {
                block.insert(k, v);
            }
            current = Some((key, value));
        } else if let Some((_, value)) = current.as_mut() {
            // Continuation: indentation stripped, newline preserved
            value.push('\n');
            value.push_str(line.trim());
        }
    }
    if let Some((k, v)) = current {
        block.insert(k, v);
    }
    block
}
