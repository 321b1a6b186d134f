use regex::Regex;
use std::sync::LazyLock;

use crate::config::SegmentRules;

/// Unicode whitespace plus the ASCII separators U+001C..U+001F, which `\s` leaves out
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x1C-\x1F]+").expect("whitespace pattern is valid"));

/// Purna viram, period, question mark and exclamation mark. A run of them is one boundary.
static SENTENCE_DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[।.?!]+").expect("delimiter pattern is valid"));

/// Devanagari block or printable ASCII
pub fn is_allowed_char(c: char) -> bool {
    matches!(c, '\u{0900}'..='\u{097F}' | '\u{0020}'..='\u{007E}')
}

/// Clean text by collapsing whitespace and dropping characters outside
/// the Devanagari block and printable ASCII
pub fn clean_text(text: &str) -> String {
    let text = WHITESPACE_RUN.replace_all(text, " ");

    let text: String = text.chars().filter(|&c| is_allowed_char(c)).collect();

    // dropped symbols can leave two spaces side by side
    let text = WHITESPACE_RUN.replace_all(&text, " ");

    text.trim().to_string()
}

/// Split normalized text into sentences that pass `rules`, in source order
pub fn split_into_sentences(text: &str, rules: &SegmentRules) -> Vec<String> {
    SENTENCE_DELIMITERS
        .split(text)
        .map(str::trim)
        .filter(|candidate| rules.accepts(candidate))
        .map(str::to_string)
        .collect()
}
