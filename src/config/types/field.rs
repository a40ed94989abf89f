//! Config field paths for diagnostics.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path to a config field, with array indices.
///
/// # Example
///
/// ```ignore
/// let path = FieldPath::new("sidebar").index(2).field("items").index(0).field("link");
/// assert_eq!(path.as_str(), "sidebar[2].items[0].link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a nested field name.
    pub fn field(&self, name: &str) -> Self {
        Self(format!("{}.{}", self.0, name))
    }

    /// Append an array index.
    pub fn index(&self, i: usize) -> Self {
        Self(format!("{}[{}]", self.0, i))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.as_str()).bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path() {
        let path = FieldPath::new("sidebar")
            .index(2)
            .field("groups")
            .index(0)
            .field("text");
        assert_eq!(path.as_str(), "sidebar[2].groups[0].text");
    }
}
