//! Damped random-surfer transition model

use super::{check_damping, Distribution};
use crate::error::{PageRankError, Result};
use crate::graph::Graph;

/// Probability distribution over the next page visited from `page`.
///
/// With probability `damping` the surfer follows one of the page's links,
/// chosen uniformly; otherwise it jumps to any page of the graph. A page
/// without links jumps uniformly.
pub fn transition(graph: &Graph, page: &str, damping: f64) -> Result<Distribution> {
    check_damping(damping)?;
    let links = graph
        .out_links(page)
        .ok_or_else(|| PageRankError::InvalidGraph(format!("unknown page '{}'", page)))?;

    if links.is_empty() {
        return Ok(Distribution::uniform(graph));
    }

    let n = graph.len() as f64;
    let teleport = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    Ok(graph
        .pages()
        .map(|candidate| {
            let p = if links.contains(candidate) {
                teleport + follow
            } else {
                teleport
            };
            (candidate.clone(), p)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_b() -> Graph {
        Graph::from_adjacency([("A", vec!["B", "C"]), ("B", vec!["C"]), ("C", vec![])]).unwrap()
    }

    #[test]
    fn test_transition_follows_links() {
        let graph = scenario_b();
        let dist = transition(&graph, "A", 0.85).unwrap();

        assert!((dist.get("A").unwrap() - 0.05).abs() < 1e-12);
        assert!((dist.get("B").unwrap() - 0.475).abs() < 1e-12);
        assert!((dist.get("C").unwrap() - 0.475).abs() < 1e-12);
        assert!((dist.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_transition_dangling_is_uniform() {
        let graph = scenario_b();
        let dist = transition(&graph, "C", 0.85).unwrap();
        assert_eq!(dist, Distribution::uniform(&graph));
    }

    #[test]
    fn test_transition_unknown_page() {
        let graph = scenario_b();
        let err = transition(&graph, "Z", 0.85).unwrap_err();
        assert!(matches!(err, PageRankError::InvalidGraph(_)));
    }

    #[test]
    fn test_transition_rejects_bad_damping() {
        let graph = scenario_b();
        assert!(matches!(
            transition(&graph, "A", 1.5),
            Err(PageRankError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_single_page_transition() {
        let graph = Graph::from_adjacency([("only", Vec::<&str>::new())]).unwrap();
        let dist = transition(&graph, "only", 0.85).unwrap();
        assert_eq!(dist.get("only"), Some(1.0));
    }
}
