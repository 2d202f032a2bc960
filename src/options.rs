use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// `word - count`, one per line
    #[default]
    Plain,
    /// `[ 1]                 word -    3`
    Ranked,
    Json,
    Yaml,
}
