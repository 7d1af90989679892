//! Text normalization helpers
//!
//! Paths and tags are compared on a normalized key: surrounding whitespace
//! stripped, then lowercased. The original text is always what gets stored.

/// Strip leading and trailing whitespace
#[inline]
#[must_use]
pub fn trim(text: &str) -> &str {
    text.trim()
}

/// Lowercase the whole string
#[inline]
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Comparison key: `fold_case(trim(text))`
#[inline]
#[must_use]
pub fn normalize(text: &str) -> String {
    fold_case(trim(text))
}

/// Compare two strings on their normalized keys
#[inline]
#[must_use]
pub fn eq_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
