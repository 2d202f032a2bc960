//! Stop-word set loaded from a comma-separated sidecar file.

use crate::config::StopWordParsing;
use crate::error::{EngineError, Result};
use crate::tokenizer::MIN_TOKEN_LEN;
use hashbrown::HashSet;
use std::path::Path;

/// Read-only set of words excluded from counting.
#[derive(Debug, Clone, Default)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Load the set from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StopWordsRead`] when the file is missing or
    /// unreadable. There is no built-in fallback list.
    pub fn load(path: &Path, parsing: StopWordParsing) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| EngineError::StopWordsRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let content = crate::loader::decode_lossy(bytes, path);
        let set = Self::parse(&content, parsing);
        log::info!("loaded {} stop words from {}", set.len(), path.display());
        Ok(set)
    }

    /// Build the set from the file's contents.
    pub fn parse(content: &str, parsing: StopWordParsing) -> Self {
        let words = match parsing {
            StopWordParsing::Trimmed => content
                .split(',')
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_owned)
                .collect(),
            StopWordParsing::Literal => content.split(',').map(str::to_owned).collect(),
        };
        Self { words }
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Combined filter predicate: long enough and not a stop word.
    pub fn keeps(&self, token: &str) -> bool {
        token.len() >= MIN_TOKEN_LEN && !self.is_stop_word(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
