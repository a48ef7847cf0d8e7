//! Rank command: load the corpus and run both estimators

use crate::app::Cli;
use crate::output::{self, RankResults};
use anyhow::{Context, Result};
use pagerank_core::{crawl, estimate_by_sampling, iterate, RankConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    config.validate()?;

    let graph = crawl(&cli.corpus)
        .with_context(|| format!("failed to load corpus {}", cli.corpus.display()))?;

    if cli.show_graph {
        print!("{}", output::format_graph(&graph));
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let sampling = estimate_by_sampling(&graph, config.damping, config.samples, &mut rng)?;
    let iteration = iterate(&graph, &config.iteration_options())?;

    tracing::info!(
        "Estimators differ by {:.4} (L1), {:.4} at most per page",
        sampling.l1_distance(&iteration.ranks),
        sampling.max_abs_diff(&iteration.ranks)
    );
    if let (Some((sampled_top, _)), Some((iterated_top, _))) =
        (sampling.top(), iteration.ranks.top())
    {
        tracing::info!(
            "Highest rank: {} by sampling, {} by iteration",
            sampled_top,
            iterated_top
        );
    }

    let results = RankResults {
        config: &config,
        sampling: &sampling,
        iteration: &iteration,
    };
    print!("{}", output::format_results(&results, cli.format)?);

    Ok(())
}

/// Config file (explicit or default location), then command-line overrides
fn resolve_config(cli: &Cli) -> Result<RankConfig> {
    let mut config = match &cli.config {
        Some(path) => RankConfig::load_from(path)?,
        None => RankConfig::load()?,
    };

    if let Some(damping) = cli.damping {
        config.damping = damping;
    }
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(threshold) = cli.threshold {
        config.convergence_threshold = threshold;
    }
    if let Some(max_iterations) = cli.max_iterations {
        config.max_iterations = max_iterations;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(dangling) = cli.dangling {
        config.dangling = dangling.into();
    }

    tracing::debug!("Effective configuration: {:?}", config);
    Ok(config)
}
