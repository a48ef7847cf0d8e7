//! Monte-Carlo PageRank estimation by random walk

use super::{check_damping, check_positive, transition, Distribution};
use crate::error::{PageRankError, Result};
use crate::graph::{Graph, Page};
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// Estimate PageRank from the visit frequencies of a random walk.
///
/// The walk starts on a uniformly chosen page and takes `samples` steps, each
/// drawn from [`transition`]. Every page's rank is its visit count divided by
/// `samples + 1`, so the start page is counted too.
///
/// Each step builds the current page's row and drops it after the draw, so
/// memory stays linear in the page count however many pages the walk visits.
pub fn estimate_by_sampling<R: Rng + ?Sized>(
    graph: &Graph,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<Distribution> {
    check_damping(damping)?;
    check_positive("sample count", samples)?;

    let mut visits: BTreeMap<&Page, u64> = graph.pages().map(|page| (page, 0)).collect();
    let mut current = graph
        .pages()
        .choose(rng)
        .ok_or_else(|| PageRankError::InvalidGraph("graph has no pages".to_string()))?;
    tracing::debug!("Random walk starts at {}", current);
    record_visit(&mut visits, current);

    for _ in 0..samples {
        let model = transition(graph, current.as_str(), damping)?;
        let next = weighted_choice(&model, rng).ok_or_else(|| {
            PageRankError::InvalidGraph(format!("no transition out of '{}'", current))
        })?;
        current = graph.get_page(next.as_str()).ok_or_else(|| {
            PageRankError::InvalidGraph(format!("walk reached unknown page '{}'", next))
        })?;
        record_visit(&mut visits, current);
    }

    let steps = samples as f64 + 1.0;
    let visited = visits.values().filter(|&&count| count > 0).count();
    tracing::info!(
        "Sampled {} steps over {} pages ({} pages visited)",
        samples,
        graph.len(),
        visited
    );

    Ok(visits
        .into_iter()
        .map(|(page, count)| (page.clone(), count as f64 / steps))
        .collect())
}

fn record_visit<'g>(visits: &mut BTreeMap<&'g Page, u64>, page: &'g Page) {
    *visits.entry(page).or_insert(0) += 1;
}

/// Draw one page with probability proportional to its weight.
///
/// Walks the cumulative sum of the weights in page order and returns the
/// first page whose running total exceeds a uniform draw from
/// `[0, total)`. Non-positive weights are never chosen. Returns `None` when no
/// page has positive weight.
pub fn weighted_choice<'a, R: Rng + ?Sized>(
    distribution: &'a Distribution,
    rng: &mut R,
) -> Option<&'a Page> {
    let total: f64 = distribution
        .iter()
        .map(|(_, weight)| weight)
        .filter(|weight| *weight > 0.0)
        .sum();
    if !total.is_finite() || total <= 0.0 {
        return None;
    }

    let target = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last = None;

    for (page, weight) in distribution.iter() {
        if weight <= 0.0 {
            continue;
        }
        cumulative += weight;
        last = Some(page);
        if target < cumulative {
            return last;
        }
    }

    // Rounding can leave the running sum a hair below the draw.
    last
}
