//! Pattern matching against payload renderings.
//!
//! Supports three matching modes (tried in order):
//! 1. **Glob patterns**: e.g., `*.txt`, `error: *`
//! 2. **Regex**: e.g., `^connection .* refused$`
//! 3. **Exact match**: literal string comparison

use glob::Pattern;
use regex::Regex;

/// Match a pattern against a payload's text rendering.
///
/// # Example
///
/// ```rust
/// use expectant::text_matches;
///
/// assert!(text_matches("*.txt", "notes.txt"));
/// assert!(text_matches(r"^v\d+\.\d+$", "v1.42"));
/// assert!(text_matches("exact", "exact"));
/// assert!(!text_matches("*.txt", "notes.rs"));
/// ```
pub fn text_matches(pattern: &str, actual: &str) -> bool {
    // Try glob pattern first
    if let Ok(glob) = Pattern::new(pattern) {
        if glob.matches(actual) {
            return true;
        }
    }

    // Try regex
    if let Ok(re) = Regex::new(pattern) {
        if re.is_match(actual) {
            return true;
        }
    }

    // Exact match fallback
    actual == pattern
}
