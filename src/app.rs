use crate::cli::Args;
use crate::config::Config;
use crate::output;
use anyhow::{Context, Result};

/// Run one invocation from already-parsed arguments.
pub fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args).context("invalid arguments")?;
    init_logging(config.verbosity);

    log::debug!("running with {:?}", config.engine);
    let result = word_freq_engine::run(&config.engine)?;

    output::emit(&result, &config).context("failed to write output")?;
    Ok(())
}

/// `RUST_LOG` wins over `-v` when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().default_filter_or(level);
    // a logger may already be installed when running under tests
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
