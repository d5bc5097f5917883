//! The line-oriented `.talismanignore` format.
//!
//! One rule per line: a glob-style path pattern, optionally followed by a
//! `#` comment. A comment starting with `ignore:<detector>,<detector>`
//! scopes the rule to those detectors only.

use regex::Regex;
use std::sync::LazyLock;

/// Default name of the legacy ignore file at the repository root.
pub const DEFAULT_IGNORE_FILE: &str = ".talismanignore";

/// Detector-scoping directive at the start of a rule comment.
static DETECTOR_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^ignore:([^\s]+)").unwrap());

/// A single ignore rule: a path pattern plus its trailing comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ignore {
    pattern: String,
    comment: String,
    ignored_detectors: Vec<String>,
}

impl Ignore {
    /// Build a rule from a pattern and its comment, extracting any
    /// detector-scoping directive from the comment.
    pub fn new(pattern: &str, comment: &str) -> Self {
        let ignored_detectors = DETECTOR_DIRECTIVE
            .captures(comment)
            .map(|caps| {
                caps[1]
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            pattern: pattern.to_string(),
            comment: comment.to_string(),
            ignored_detectors,
        }
    }

    /// Parse one line of the ignore file: everything before the first `#`
    /// is the pattern, everything after it is the comment, both trimmed.
    pub fn parse_line(line: &str) -> Self {
        match line.find('#') {
            Some(hash) => Self::new(line[..hash].trim(), line[hash + 1..].trim()),
            None => Self::new(line.trim(), ""),
        }
    }

    /// The glob-style path pattern. Empty for blank and comment-only lines.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Free text following the `#`, without the marker itself.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Detectors this rule is scoped to. Empty means the rule applies to
    /// every detector.
    pub fn ignored_detectors(&self) -> &[String] {
        &self.ignored_detectors
    }
}

/// The parsed contents of a `.talismanignore` file, in line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ignores {
    rules: Vec<Ignore>,
}

impl Ignores {
    /// Parse raw file content, one rule per line.
    ///
    /// Blank and comment-only lines still parse, to a rule with an empty
    /// pattern, so rules keep their file positions. Empty content yields an
    /// empty set.
    pub fn from_content(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Build a rule set from individual lines.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            rules: lines.into_iter().map(Ignore::parse_line).collect(),
        }
    }

    /// Every parsed rule, including those with an empty pattern.
    pub fn rules(&self) -> &[Ignore] {
        &self.rules
    }

    /// The patterns that can match a path; blank and comment-only lines
    /// are skipped.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(Ignore::pattern)
            .filter(|pattern| !pattern.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
