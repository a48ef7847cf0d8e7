//! PageRank by power iteration

use super::{check_damping, check_positive, check_threshold, Distribution};
use crate::config::{DEFAULT_CONVERGENCE_THRESHOLD, DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS};
use crate::error::{PageRankError, Result};
use crate::graph::{Graph, Page};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What happens to the rank held by pages without out-links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingStrategy {
    /// Dangling rank flows nowhere; totals may end below 1
    #[default]
    Leak,
    /// Dangling rank is spread uniformly over all pages
    Redistribute,
}

impl DanglingStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DanglingStrategy::Leak => "leak",
            DanglingStrategy::Redistribute => "redistribute",
        }
    }
}

impl fmt::Display for DanglingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of a power-iteration run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationOptions {
    pub damping: f64,
    /// Stop once the summed absolute change of a sweep drops below this
    pub convergence_threshold: f64,
    /// Fail with [`PageRankError::NotConverged`] after this many sweeps
    pub max_iterations: usize,
    pub dangling: DanglingStrategy,
}

impl Default for IterationOptions {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            convergence_threshold: DEFAULT_CONVERGENCE_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            dangling: DanglingStrategy::default(),
        }
    }
}

/// Outcome of a converged power-iteration run
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub ranks: Distribution,
    /// Sweeps performed, including the one that met the threshold
    pub sweeps: usize,
    /// Summed absolute change of the last sweep
    pub delta: f64,
}

/// Estimate PageRank by iterating the recurrence until it settles.
///
/// Uses the leak dangling strategy and the default sweep limit.
pub fn estimate_by_iteration(
    graph: &Graph,
    damping: f64,
    convergence_threshold: f64,
) -> Result<Distribution> {
    let options = IterationOptions {
        damping,
        convergence_threshold,
        ..IterationOptions::default()
    };
    iterate(graph, &options).map(|report| report.ranks)
}

/// Run power iteration from the uniform distribution.
///
/// Each sweep computes every new rank from the previous snapshot only:
///
/// `rank'(p) = (1 - d) / N + d * sum(rank(i) / L(i))` over pages `i` linking to `p`
///
/// The run stops after the first sweep whose summed absolute change is below
/// the threshold and returns that sweep's ranks unnormalized.
pub fn iterate(graph: &Graph, options: &IterationOptions) -> Result<IterationReport> {
    check_damping(options.damping)?;
    check_threshold(options.convergence_threshold)?;
    check_positive("max iterations", options.max_iterations)?;

    if graph.len() == 1 {
        tracing::debug!("Single-page graph, rank is trivially 1");
        return Ok(IterationReport {
            ranks: Distribution::uniform(graph),
            sweeps: 0,
            delta: 0.0,
        });
    }

    let index = LinkIndex::new(graph);
    let mut previous = Distribution::uniform(graph);
    let mut delta = f64::INFINITY;

    for sweep_count in 1..=options.max_iterations {
        let next = index.sweep(&previous, options.damping, options.dangling);
        delta = next.l1_distance(&previous);
        tracing::debug!("Sweep {}: delta {:.6}", sweep_count, delta);

        if delta < options.convergence_threshold {
            let total = next.total();
            tracing::info!(
                "Power iteration converged after {} sweeps (delta {:.6}, total rank {:.6})",
                sweep_count,
                delta,
                total
            );
            if options.dangling == DanglingStrategy::Leak && !index.dangling.is_empty() {
                tracing::debug!(
                    "{} dangling pages leaked {:.6} of the rank",
                    index.dangling.len(),
                    1.0 - total
                );
            }
            return Ok(IterationReport {
                ranks: next,
                sweeps: sweep_count,
                delta,
            });
        }

        previous = next;
    }

    tracing::warn!(
        "Power iteration stopped after {} sweeps without converging",
        options.max_iterations
    );
    Err(PageRankError::NotConverged {
        iterations: options.max_iterations,
        delta,
    })
}

/// Apply exactly one PageRank update to `ranks`.
///
/// Pages missing from `ranks` are read as 0. The input is not modified.
///
/// [`iterate`] answers a single-page graph with rank 1 and no sweeps; this
/// function always sweeps, so under [`DanglingStrategy::Leak`] it maps that
/// page's 1 to `1 - damping`.
pub fn sweep(
    graph: &Graph,
    ranks: &Distribution,
    damping: f64,
    dangling: DanglingStrategy,
) -> Result<Distribution> {
    check_damping(damping)?;
    Ok(LinkIndex::new(graph).sweep(ranks, damping, dangling))
}

/// Reverse adjacency with each link's share of its source's rank
struct LinkIndex<'g> {
    incoming: BTreeMap<&'g Page, Vec<(&'g Page, f64)>>,
    dangling: Vec<&'g Page>,
    page_count: f64,
}

impl<'g> LinkIndex<'g> {
    fn new(graph: &'g Graph) -> Self {
        let incoming = graph
            .incoming()
            .into_iter()
            .map(|(page, sources)| {
                let weighted = sources
                    .into_iter()
                    .filter_map(|source| {
                        let degree = graph.out_degree(source.as_str())?;
                        (degree > 0).then(|| (source, 1.0 / degree as f64))
                    })
                    .collect();
                (page, weighted)
            })
            .collect();

        Self {
            incoming,
            dangling: graph.dangling().collect(),
            page_count: graph.len() as f64,
        }
    }

    fn sweep(&self, ranks: &Distribution, damping: f64, dangling: DanglingStrategy) -> Distribution {
        let rank_of = |page: &Page| ranks.get(page.as_str()).unwrap_or(0.0);

        let mut base = (1.0 - damping) / self.page_count;
        if dangling == DanglingStrategy::Redistribute {
            let mass: f64 = self.dangling.iter().map(|&page| rank_of(page)).sum();
            base += damping * mass / self.page_count;
        }

        self.incoming
            .iter()
            .map(|(page, sources)| {
                let inflow: f64 = sources
                    .iter()
                    .map(|&(source, share)| rank_of(source) * share)
                    .sum();
                ((*page).clone(), base + damping * inflow)
            })
            .collect()
    }
}
