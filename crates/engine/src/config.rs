use derive_builder::Builder;
use std::path::PathBuf;

/// Stop-word file used when none is given explicitly.
pub const DEFAULT_STOP_WORDS_PATH: &str = "../stop_words.txt";

/// Number of ranked entries kept when none is given explicitly.
pub const DEFAULT_LIMIT: usize = 25;

/// How the comma-separated entries of the stop-word file are read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopWordParsing {
    /// Trim surrounding whitespace and skip empty entries.
    #[default]
    Trimmed,
    /// Keep every piece between commas exactly as written, newlines included.
    Literal,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    /// Document to count.
    pub input: PathBuf,
    #[builder(default = "PathBuf::from(DEFAULT_STOP_WORDS_PATH)")]
    pub stop_words_path: PathBuf,
    #[builder(default)]
    pub stop_word_parsing: StopWordParsing,
    #[builder(default = "DEFAULT_LIMIT")]
    pub limit: usize,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.input {
            Some(path) if path.as_os_str().is_empty() => {
                Err("input path must not be empty".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl Config {
    /// Config for `input` with every other field at its default.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            stop_words_path: PathBuf::from(DEFAULT_STOP_WORDS_PATH),
            stop_word_parsing: StopWordParsing::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}
