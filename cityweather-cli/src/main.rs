//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive Home / Favorites screens
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod render;
mod ui;

/// Logs go to stderr so they never interleave with rendered weather.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose);
    cmd.run().await
}
