//! Pluralization helpers for log lines.

/// `"s"` for every count except one
///
/// - `plural_s(0)` -> `"s"` (0 errors)
/// - `plural_s(1)` -> `""` (1 error)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by a regular noun
///
/// - `plural_count(1, "document")` -> `"1 document"`
/// - `plural_count(19, "sidebar link")` -> `"19 sidebar links"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "section"), "0 sections");
        assert_eq!(plural_count(1, "document"), "1 document");
        assert_eq!(plural_count(19, "sidebar link"), "19 sidebar links");
    }
}
