use crate::counter::FrequencyTable;
use crate::stats::WordCount;
use std::cmp::Reverse;

/// Highest counts first, at most `limit` entries.
///
/// Equal counts keep the order in which their words were first seen.
pub fn rank(table: FrequencyTable, limit: usize) -> Vec<WordCount> {
    let mut entries = table.into_entries();
    // stable: ties stay in first-seen order
    entries.sort_by_key(|e| Reverse(e.count));
    entries.truncate(limit);
    entries
}
