//! CLI argument definitions

use clap::{Parser, ValueEnum};
use pagerank_core::DanglingStrategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagerank")]
#[command(
    author,
    version,
    about = "Rank the pages of a hyperlinked HTML corpus by sampling and by iteration"
)]
pub struct Cli {
    /// Directory of HTML pages
    pub corpus: PathBuf,

    /// Probability of following a link rather than jumping to a random page
    #[arg(long)]
    pub damping: Option<f64>,

    /// Random-walk length for the sampling estimator
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Power-iteration stopping delta
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Power-iteration sweep limit
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Seed for a reproducible random walk
    #[arg(long)]
    pub seed: Option<u64>,

    /// Handling of rank held by pages without links
    #[arg(long, value_enum)]
    pub dangling: Option<DanglingArg>,

    /// Configuration file (YAML)
    #[arg(long, env = "PAGERANK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Print the parsed link graph before ranking
    #[arg(long)]
    pub show_graph: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DanglingArg {
    Leak,
    Redistribute,
}

impl From<DanglingArg> for DanglingStrategy {
    fn from(arg: DanglingArg) -> Self {
        match arg {
            DanglingArg::Leak => DanglingStrategy::Leak,
            DanglingArg::Redistribute => DanglingStrategy::Redistribute,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Cli,
    Json,
    Csv,
    Md,
}
