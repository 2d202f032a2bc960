// src/output.rs
use std::io::Write;

use serde::Serialize;
use word_freq_engine::stats::{RunResult, WordCount};

use crate::config::Config;
use crate::options::OutputFormat;

/// Shape of the `json` and `yaml` outputs.
#[derive(Debug, Serialize)]
struct Report<'a> {
    limit: usize,
    distinct_words: usize,
    total_words: usize,
    words: &'a [WordCount],
}

/// Emit results to stdout in the configured format.
pub fn emit(result: &RunResult, config: &Config) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut writer = std::io::BufWriter::new(stdout.lock());
    write_result(result, config, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Render `result` into any writer.
pub fn write_result(
    result: &RunResult,
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match config.format {
        OutputFormat::Plain => output_plain(&result.ranked, out),
        OutputFormat::Ranked => output_ranked(&result.ranked, out),
        OutputFormat::Json => output_json(&report(result, config), out),
        OutputFormat::Yaml => output_yaml(&report(result, config), out),
    }
}

fn report<'a>(result: &'a RunResult, config: &Config) -> Report<'a> {
    Report {
        limit: config.engine.limit,
        distinct_words: result.distinct_words,
        total_words: result.total_words,
        words: &result.ranked,
    }
}

fn output_plain(ranked: &[WordCount], out: &mut impl Write) -> anyhow::Result<()> {
    for entry in ranked {
        writeln!(out, "{} - {}", entry.word, entry.count)?;
    }
    Ok(())
}

fn output_ranked(ranked: &[WordCount], out: &mut impl Write) -> anyhow::Result<()> {
    for (idx, entry) in ranked.iter().enumerate() {
        writeln!(out, "[{:>2}] {:>20} - {:>4}", idx + 1, entry.word, entry.count)?;
    }
    Ok(())
}

fn output_json(report: &Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

fn output_yaml(report: &Report<'_>, out: &mut impl Write) -> anyhow::Result<()> {
    serde_yaml::to_writer(&mut *out, report)?;
    Ok(())
}
