// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use word_freq_engine::config::{DEFAULT_LIMIT, DEFAULT_STOP_WORDS_PATH};

use super::{parsers, value_enum::CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "word_freq",
    version = crate::VERSION,
    about = "テキストファイルの単語出現頻度を集計し、上位の単語を表示します"
)]
pub struct Args {
    /// 集計対象のテキストファイル
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// ストップワードファイル（カンマ区切り）
    #[arg(
        short,
        long,
        value_hint = ValueHint::FilePath,
        default_value = DEFAULT_STOP_WORDS_PATH,
        help_heading = "入力"
    )]
    pub stop_words: PathBuf,

    /// ストップワードを前後の空白で切り詰めない（改行もそのまま比較）
    #[arg(long, help_heading = "入力")]
    pub literal_stop_words: bool,

    /// 上位N件のみ表示
    #[arg(
        short = 'n',
        long,
        value_parser = parsers::parse_positive_usize,
        default_value_t = DEFAULT_LIMIT,
        help_heading = "出力"
    )]
    pub top: usize,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "plain", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// ログ出力を詳細にする（-v: info, -vv: debug, -vvv: trace）
    #[arg(short, long, action = ArgAction::Count, help_heading = "動作")]
    pub verbose: u8,
}
