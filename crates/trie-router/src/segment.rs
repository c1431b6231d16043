//! Path tokenization and pattern segment parsing.

use std::fmt;

/// A segment in a route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A literal segment, matched by string equality.
    Literal(&'a str),
    /// A named parameter segment (e.g., `:id`), matching any single segment.
    Param(&'a str),
}

impl<'a> Segment<'a> {
    /// Parses one pattern token.
    ///
    /// Pattern syntax:
    /// - `users` - Literal segment
    /// - `:id` - Parameter named `id`
    ///
    /// A bare `:` has no name and stays a literal.
    ///
    /// # Example
    ///
    /// ```
    /// use trie_router::Segment;
    ///
    /// assert_eq!(Segment::parse(":id"), Segment::Param("id"));
    /// assert_eq!(Segment::parse("users"), Segment::Literal("users"));
    /// assert_eq!(Segment::parse(":"), Segment::Literal(":"));
    /// ```
    #[must_use]
    pub fn parse(token: &'a str) -> Self {
        match token.strip_prefix(':') {
            Some(name) if !name.is_empty() => Self::Param(name),
            _ => Self::Literal(token),
        }
    }

    /// Parses every segment of a pattern.
    #[must_use]
    pub fn parse_pattern(pattern: &'a str) -> Vec<Self> {
        split_path(pattern).map(Self::parse).collect()
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Param(name) => write!(f, ":{name}"),
        }
    }
}

/// Splits a path into segments.
///
/// Leading and trailing slashes are trimmed first, so `""` and `"/"` both
/// yield a single empty segment standing for the root. Interior empty
/// segments (`/a//b`) are kept.
pub fn split_path(path: &str) -> std::str::Split<'_, char> {
    path.trim_matches('/').split('/')
}
