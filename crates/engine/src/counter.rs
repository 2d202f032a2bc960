use crate::stats::WordCount;
use hashbrown::HashMap;

/// Occurrence counts keyed by token, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
    total: usize,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `token`.
    pub fn increment(&mut self, token: String) {
        self.total += 1;
        if let Some(&slot) = self.index.get(token.as_str()) {
            self.entries[slot].count += 1;
            return;
        }
        self.index.insert(token.clone(), self.entries.len());
        self.entries.push(WordCount {
            word: token,
            count: 1,
        });
    }

    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).map(|&slot| self.entries[slot].count)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Entries in the order their tokens were first seen.
    pub fn into_entries(self) -> Vec<WordCount> {
        self.entries
    }
}

impl FromIterator<String> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut table = Self::new();
        for token in iter {
            table.increment(token);
        }
        table
    }
}

/// Count every token in `tokens`.
pub fn count<I>(tokens: I) -> FrequencyTable
where
    I: IntoIterator<Item = String>,
{
    tokens.into_iter().collect()
}
