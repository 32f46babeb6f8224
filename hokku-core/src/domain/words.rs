//! Word extraction
//!
//! A word is a maximal run of ASCII letters and apostrophes. Digits,
//! punctuation and whitespace only separate words and never appear in them.

use regex::Regex;
use std::sync::OnceLock;

static WORD_PATTERN: OnceLock<Regex> = OnceLock::new();

fn word_pattern() -> &'static Regex {
    WORD_PATTERN.get_or_init(|| Regex::new(r"[A-Za-z']+").expect("word pattern is valid"))
}

/// Extract word tokens from a line, left to right.
pub fn extract_words(text: &str) -> Vec<&str> {
    word_pattern().find_iter(text).map(|m| m.as_str()).collect()
}
