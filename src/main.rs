use clap::Parser;
use std::process::ExitCode;
use word_freq::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match word_freq::app::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
