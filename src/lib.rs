#![doc = include_str!("../README.md")]

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod patch;
pub mod report;
pub mod steps;
pub mod validation;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() -> Result<()> {
    use clap::Parser;

    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let config = config::PatchConfig::from_cli(&cli)?;
    steps::execute(&config)?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` flags pick the level.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}
