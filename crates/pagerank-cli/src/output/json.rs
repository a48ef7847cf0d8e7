//! JSON output formatter

use super::RankResults;
use anyhow::Result;

pub fn format_results(results: &RankResults<'_>) -> Result<String> {
    let config = results.config;
    let output = serde_json::json!({
        "damping": config.damping,
        "samples": config.samples,
        "convergence_threshold": config.convergence_threshold,
        "dangling": config.dangling,
        "seed": config.seed,
        "sweeps": results.iteration.sweeps,
        "sampling": results.sampling,
        "iteration": results.iteration.ranks,
    });

    Ok(serde_json::to_string_pretty(&output)? + "\n")
}
