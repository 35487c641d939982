//! Utility functions for string processing.

/// Normalize a string for matching: Unicode lowercase, nothing else.
///
/// Whitespace and diacritics are left alone so that a match in the normalized
/// text is a match in the original text.
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive substring test against an already-normalized needle.
///
/// An empty needle matches every haystack.
pub fn contains_normalized(haystack: &str, normalized_needle: &str) -> bool {
    normalized_needle.is_empty() || normalize(haystack).contains(normalized_needle)
}
