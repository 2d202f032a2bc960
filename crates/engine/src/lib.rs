// crates/engine/src/lib.rs
pub mod config;
pub mod counter;
pub mod error;
pub mod loader;
pub mod ranker;
pub mod stats;
pub mod stop_words;
pub mod tokenizer;

use crate::config::Config;
use crate::error::Result;
use crate::stats::RunResult;
use crate::stop_words::StopWordSet;

/// Run the word frequency pipeline.
///
/// Loads the stop words and the document, then tokenizes, filters, counts
/// and ranks. Nothing is printed; the caller renders the returned
/// `RunResult`.
///
/// # Errors
///
/// Returns an error if either the stop-word file or the input document cannot
/// be read. No partial result is produced.
pub fn run(config: &Config) -> Result<RunResult> {
    let stop_words = StopWordSet::load(&config.stop_words_path, config.stop_word_parsing)?;
    let document = loader::load_document(&config.input)?;
    Ok(count_document(&document, &stop_words, config.limit))
}

/// Pipeline stages after loading, for text already in memory.
pub fn count_document(document: &str, stop_words: &StopWordSet, limit: usize) -> RunResult {
    let table = counter::count(tokenizer::tokenize(document).filter(|t| stop_words.keeps(t)));
    let distinct_words = table.len();
    let total_words = table.total();
    log::debug!("counted {total_words} words, {distinct_words} distinct");

    let ranked = ranker::rank(table, limit);
    log::debug!("ranked {} of {distinct_words} words", ranked.len());

    RunResult {
        ranked,
        distinct_words,
        total_words,
    }
}
