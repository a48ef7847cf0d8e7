//! PageRank CLI
//!
//! Rank the pages of a hyperlinked HTML corpus.

use clap::Parser;
use pagerank_core::error::exit_codes;
use pagerank_core::PageRankError;

mod app;
mod commands;
mod output;

use app::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    if let Err(err) = commands::rank::run(&cli) {
        eprintln!("Error: {:#}", err);
        let code = err
            .downcast_ref::<PageRankError>()
            .map(PageRankError::exit_code)
            .unwrap_or(exit_codes::GENERAL_ERROR);
        std::process::exit(code);
    }
}
