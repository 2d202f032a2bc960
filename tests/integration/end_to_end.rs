// tests/integration/end_to_end.rs
use clap::Parser;
use std::ffi::OsString;
use word_freq::cli::Args;
use word_freq::config::Config;
use word_freq_engine::config::{ConfigBuilder, StopWordParsing};
use word_freq_engine::error::EngineError;
use word_freq_engine::stats::WordCount;

use crate::common::{CAT_DOCUMENT, ENGLISH_STOP_WORDS, PASSAGE, STOP_WORDS, Workspace, descending_document};

fn run_in(ws: &Workspace, document: &str, limit: usize) -> word_freq_engine::stats::RunResult {
    let input = ws.write_file("input.txt", document);
    let config = ConfigBuilder::default()
        .input(input)
        .stop_words_path(ws.root().join("stop_words.txt"))
        .limit(limit)
        .build()
        .unwrap();
    word_freq_engine::run(&config).unwrap()
}

#[test]
fn cat_document_end_to_end() {
    let ws = Workspace::with_stop_words(STOP_WORDS);
    let result = run_in(&ws, CAT_DOCUMENT, 25);

    assert_eq!(
        result.ranked,
        vec![WordCount::new("cat", 2), WordCount::new("sat", 1)]
    );
    assert_eq!(result.total_words, 3);
}

#[test]
fn fewer_distinct_words_than_limit() {
    let ws = Workspace::with_stop_words(ENGLISH_STOP_WORDS);
    let result = run_in(&ws, &descending_document(7), 25);

    assert_eq!(result.ranked.len(), 7);
    assert_eq!(result.distinct_words, 7);
    assert!(result.ranked.iter().all(|e| e.count > 0));
}

#[test]
fn output_satisfies_ranking_properties() {
    let ws = Workspace::with_stop_words(ENGLISH_STOP_WORDS);
    let result = run_in(&ws, PASSAGE, 25);
    let stop_words: Vec<&str> = ENGLISH_STOP_WORDS.trim().split(',').collect();

    assert_eq!(result.ranked.len(), 25.min(result.distinct_words));
    for pair in result.ranked.windows(2) {
        assert!(pair[0].count >= pair[1].count);
    }
    for entry in &result.ranked {
        assert!(entry.word.len() >= 2);
        assert!(!stop_words.contains(&entry.word.as_str()));
        assert!(
            entry
                .word
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        );
    }
}

#[test]
fn literal_parsing_misses_last_entry_with_newline() {
    let ws = Workspace::with_stop_words("the,cat\n");
    let input = ws.write_file("input.txt", "cat dog cat");

    let config = ConfigBuilder::default()
        .input(input)
        .stop_words_path(ws.root().join("stop_words.txt"))
        .stop_word_parsing(StopWordParsing::Literal)
        .build()
        .unwrap();
    let result = word_freq_engine::run(&config).unwrap();

    assert_eq!(result.ranked[0], WordCount::new("cat", 2));
}

#[test]
fn args_convert_into_a_runnable_config() {
    let ws = Workspace::with_stop_words(STOP_WORDS);
    let input = ws.write_file("input.txt", CAT_DOCUMENT);
    let stop = ws.root().join("stop_words.txt");

    let args = Args::parse_from([
        OsString::from("word_freq"),
        OsString::from("--stop-words"),
        stop.into_os_string(),
        OsString::from("--top"),
        OsString::from("1"),
        input.into_os_string(),
    ]);
    let config = Config::try_from(args).unwrap();
    let result = word_freq_engine::run(&config.engine).unwrap();

    assert_eq!(result.ranked, vec![WordCount::new("cat", 2)]);
    assert_eq!(result.distinct_words, 2);
}

#[test]
fn missing_document_reports_path() {
    let ws = Workspace::with_stop_words(STOP_WORDS);
    let config = ConfigBuilder::default()
        .input(ws.root().join("absent.txt"))
        .stop_words_path(ws.root().join("stop_words.txt"))
        .build()
        .unwrap();

    let err = word_freq_engine::run(&config).unwrap_err();
    assert!(matches!(err, EngineError::FileRead { .. }));
    assert!(err.to_string().contains("absent.txt"));
}
