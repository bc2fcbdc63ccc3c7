//! ru-soundex - Soundex phonetic codes for Russian words
//!
//! Set `RUST_LOG=debug` to trace morphology decisions.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use ru_soundex::cli::{commands, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
