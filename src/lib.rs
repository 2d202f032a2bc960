pub mod app;
pub mod cli;
pub mod config;
pub mod options;
pub mod output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
