//! Path-matching seam between ignore rules and staged changes.

/// Glob-style path matching supplied by the staged-change representation.
///
/// Ignore rules hold their patterns as opaque strings; whether a given
/// change matches one is the change's own concern, typically a glob match
/// against its repository-relative path.
pub trait PatternMatcher {
    /// Whether this change's path matches `pattern`.
    fn matches(&self, pattern: &str) -> bool;
}
