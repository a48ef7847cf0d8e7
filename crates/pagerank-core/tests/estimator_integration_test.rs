//! Integration tests comparing the sampling and power-iteration estimators

use pagerank_core::{
    crawl, estimate_by_iteration, estimate_by_sampling, iterate, sweep, transition,
    DanglingStrategy, Graph, IterationOptions, RankConfig,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use tempfile::TempDir;

const DAMPING: f64 = 0.85;

fn two_cycle() -> Graph {
    Graph::from_adjacency([("X", vec!["Y"]), ("Y", vec!["X"])]).unwrap()
}

fn dangling_sink() -> Graph {
    Graph::from_adjacency([("A", vec!["B", "C"]), ("B", vec!["C"]), ("C", vec![])]).unwrap()
}

fn write_corpus(dir: &TempDir, pages: &[(&str, &[&str])]) {
    for (name, links) in pages {
        let body: String = links
            .iter()
            .map(|target| format!("<a href=\"{}\">{}</a>\n", target, target))
            .collect();
        fs::write(
            dir.path().join(name),
            format!("<html><body>\n{}</body></html>\n", body),
        )
        .unwrap();
    }
}

#[test]
fn test_two_cycle_both_estimators() {
    let graph = two_cycle();
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let sampled = estimate_by_sampling(&graph, DAMPING, 10_000, &mut rng).unwrap();
    let iterated = estimate_by_iteration(&graph, DAMPING, 0.005).unwrap();

    for page in ["X", "Y"] {
        assert!((sampled.get(page).unwrap() - 0.5).abs() < 0.02, "{}", page);
        assert!((iterated.get(page).unwrap() - 0.5).abs() < 1e-9, "{}", page);
    }
}

#[test]
fn test_dangling_sink_both_estimators() {
    let graph = dangling_sink();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let sampled = estimate_by_sampling(&graph, DAMPING, 10_000, &mut rng).unwrap();
    assert!(sampled.get("C").unwrap() > sampled.get("A").unwrap());
    assert!(sampled.get("C").unwrap() > sampled.get("B").unwrap());

    let iterated = estimate_by_iteration(&graph, DAMPING, 0.005).unwrap();
    assert!(iterated.get("C").unwrap() > iterated.get("A").unwrap());
    assert!(iterated.get("C").unwrap() > iterated.get("B").unwrap());
    assert!((iterated.get("A").unwrap() - (1.0 - DAMPING) / 3.0).abs() < 1e-6);
}

#[test]
fn test_isolated_page_both_estimators() {
    let graph = Graph::from_adjacency([("lonely", Vec::<&str>::new())]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let sampled = estimate_by_sampling(&graph, DAMPING, 50, &mut rng).unwrap();
    let iterated = estimate_by_iteration(&graph, DAMPING, 0.005).unwrap();

    assert_eq!(sampled.get("lonely"), Some(1.0));
    assert_eq!(iterated.get("lonely"), Some(1.0));
}

#[test]
fn test_sampling_approaches_iteration() {
    // The random walk treats dangling pages as uniform jumps, which is the
    // redistribute strategy of power iteration.
    let graph = Graph::from_adjacency([
        ("1", vec!["2"]),
        ("2", vec!["1", "3"]),
        ("3", vec!["2", "4"]),
        ("4", vec!["2"]),
        ("5", vec![]),
    ])
    .unwrap();

    let options = IterationOptions {
        dangling: DanglingStrategy::Redistribute,
        convergence_threshold: 1e-9,
        ..IterationOptions::default()
    };
    let exact = iterate(&graph, &options).unwrap().ranks;

    let short = estimate_by_sampling(&graph, DAMPING, 1_000, &mut ChaCha8Rng::seed_from_u64(4))
        .unwrap();
    let long = estimate_by_sampling(&graph, DAMPING, 200_000, &mut ChaCha8Rng::seed_from_u64(4))
        .unwrap();

    assert!(long.max_abs_diff(&exact) < 0.01, "diff {}", long.max_abs_diff(&exact));
    assert!(long.l1_distance(&exact) < short.l1_distance(&exact) + 0.01);
}

#[test]
fn test_transition_matches_recurrence() {
    // One sweep from a point mass on a page is that page's transition row
    // whenever the page has links.
    let graph = dangling_sink();
    let row = transition(&graph, "A", DAMPING).unwrap();
    let point: pagerank_core::Distribution = graph
        .pages()
        .map(|page| (page.clone(), if page.as_str() == "A" { 1.0 } else { 0.0 }))
        .collect();

    let swept = sweep(&graph, &point, DAMPING, DanglingStrategy::Leak).unwrap();
    assert!(swept.max_abs_diff(&row) < 1e-12);
}

#[test]
fn test_crawl_then_rank() {
    let dir = TempDir::new().unwrap();
    write_corpus(
        &dir,
        &[
            ("1.html", &["2.html"]),
            ("2.html", &["1.html", "3.html"]),
            ("3.html", &["2.html", "4.html", "https://example.com/"]),
            ("4.html", &["2.html", "4.html"]),
        ],
    );

    let graph = crawl(dir.path()).unwrap();
    assert_eq!(graph.len(), 4);
    assert_eq!(graph.out_degree("4.html"), Some(1));

    let config = RankConfig {
        seed: Some(9),
        ..RankConfig::default()
    };
    config.validate().unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let sampled = estimate_by_sampling(&graph, config.damping, config.samples, &mut rng).unwrap();
    let iterated = iterate(&graph, &config.iteration_options()).unwrap().ranks;

    assert_eq!(sampled.top().unwrap().0.as_str(), "2.html");
    assert_eq!(iterated.top().unwrap().0.as_str(), "2.html");
    assert!((iterated.total() - 1.0).abs() < 0.01);
}
