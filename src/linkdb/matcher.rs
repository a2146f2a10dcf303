//! String matching shared by every field predicate.
//!
//! Case folding is ASCII-only: `ignore_case` lowercases `A-Z` and leaves every
//! other character (including non-ASCII letters such as `É`) untouched, so
//! `"É"` and `"é"` never match each other.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Controls how a search term is compared against a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StringSearchOptions {
    /// Require the whole field to equal the term instead of containing it.
    pub match_full_string: bool,
    /// Compare after ASCII lowercasing both sides.
    pub ignore_case: bool,
}

impl StringSearchOptions {
    pub fn new(match_full_string: bool, ignore_case: bool) -> Self {
        Self {
            match_full_string,
            ignore_case,
        }
    }

    /// Substring search, case-sensitive.
    pub fn partial() -> Self {
        Self::new(false, false)
    }

    /// Whole-string equality, case-sensitive.
    pub fn full() -> Self {
        Self::new(true, false)
    }

    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }
}

/// Returns whether `needle` is found in `haystack` under `options`.
///
/// An empty needle is a substring of everything, but only equals an empty
/// haystack.
pub fn search_string(haystack: &str, needle: &str, options: &StringSearchOptions) -> bool {
    let haystack = fold(haystack, options.ignore_case);
    let needle = fold(needle, options.ignore_case);

    if options.match_full_string {
        haystack == needle
    } else {
        haystack.contains(needle.as_ref())
    }
}

fn fold(s: &str, ignore_case: bool) -> Cow<'_, str> {
    if ignore_case && s.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(s.to_ascii_lowercase())
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_match() {
        let opts = StringSearchOptions::partial();
        assert!(search_string("abc def", "c d", &opts));
        assert!(!search_string("abc def", "C D", &opts));
        assert!(!search_string("ab", "abc", &opts));
    }

    #[test]
    fn test_full_match() {
        let opts = StringSearchOptions::full();
        assert!(search_string("abc", "abc", &opts));
        assert!(!search_string("abc def", "abc", &opts));
        assert!(!search_string("ABC", "abc", &opts));
    }

    #[test]
    fn test_ignore_case() {
        let partial = StringSearchOptions::partial().ignoring_case();
        assert!(search_string("Hello World", "WORLD", &partial));

        let full = StringSearchOptions::full().ignoring_case();
        assert!(search_string("Hello", "hELLO", &full));
        assert!(!search_string("Hello!", "hello", &full));
    }

    #[test]
    fn test_empty_needle() {
        assert!(search_string("anything", "", &StringSearchOptions::partial()));
        assert!(search_string("", "", &StringSearchOptions::partial()));
        assert!(search_string("", "", &StringSearchOptions::full()));
        assert!(!search_string("anything", "", &StringSearchOptions::full()));
    }

    #[test]
    fn test_non_ascii_is_not_folded() {
        let opts = StringSearchOptions::full().ignoring_case();
        assert!(!search_string("É", "é", &opts));
        assert!(search_string("Éa", "Éa", &opts));
        assert!(search_string("ÉA", "Éa", &opts));
    }
}
