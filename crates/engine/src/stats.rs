use serde::{Deserialize, Serialize};

/// A word and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Top entries, highest count first.
    pub ranked: Vec<WordCount>,
    /// Distinct words left after filtering.
    pub distinct_words: usize,
    /// Words left after filtering, duplicates included.
    pub total_words: usize,
}
