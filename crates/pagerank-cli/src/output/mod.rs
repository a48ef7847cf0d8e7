//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use pagerank_core::{Distribution, IterationReport, RankConfig};

pub use terminal::format_graph;

/// Both estimates plus the parameters that produced them
pub struct RankResults<'a> {
    pub config: &'a RankConfig,
    pub sampling: &'a Distribution,
    pub iteration: &'a IterationReport,
}

/// Format ranking results
pub fn format_results(results: &RankResults<'_>, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => json::format_results(results)?,
        OutputFormat::Csv => csv::format_results(results),
        OutputFormat::Md => markdown::format_results(results),
        OutputFormat::Cli => terminal::format_results(results),
    })
}
