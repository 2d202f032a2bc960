//! Document text to lowercase word tokens.
//!
//! A token is a run of ASCII letters, digits or underscores, lowercased, at
//! least [`MIN_TOKEN_LEN`] characters long. Anything else separates tokens.

use regex::Regex;
use std::sync::OnceLock;

/// Shortest token the tokenizer emits.
pub const MIN_TOKEN_LEN: usize = 2;

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap())
}

/// Split `text` into tokens, left to right.
///
/// The returned iterator borrows `text` and allocates only for the tokens it
/// yields.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    separators()
        .split(text)
        .filter(|word| word.len() >= MIN_TOKEN_LEN)
        .map(str::to_ascii_lowercase)
}
