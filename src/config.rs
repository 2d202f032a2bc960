// src/config.rs
use crate::cli::Args;
use crate::options::OutputFormat;
use word_freq_engine::config::{self as engine_config, ConfigBuilder, StopWordParsing};
use word_freq_engine::error::EngineError;

/// Everything one invocation needs: what to count and how to print it.
#[derive(Debug, Clone)]
pub struct Config {
    pub engine: engine_config::Config,
    pub format: OutputFormat,
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = EngineError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let stop_word_parsing = if args.literal_stop_words {
            StopWordParsing::Literal
        } else {
            StopWordParsing::Trimmed
        };

        let engine = ConfigBuilder::default()
            .input(args.file)
            .stop_words_path(args.stop_words)
            .stop_word_parsing(stop_word_parsing)
            .limit(args.top)
            .build()
            .map_err(|e| EngineError::Config(e.to_string()))?;

        Ok(Self {
            engine,
            format: args.format.into(),
            verbosity: args.verbose,
        })
    }
}
