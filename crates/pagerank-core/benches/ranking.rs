//! Ranking performance benchmarks
//!
//! Measures performance of:
//! - Transition row construction
//! - Monte-Carlo sampling
//! - Power iteration to convergence

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagerank_core::{
    estimate_by_sampling, iterate, transition, DanglingStrategy, Graph, IterationOptions, Page,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, BTreeSet};

const SEED: u64 = 42;

/// Random graph with `pages` pages and roughly `degree` links per page
fn random_graph(pages: usize, degree: usize) -> Graph {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED);
    let links: BTreeMap<Page, BTreeSet<Page>> = (0..pages)
        .map(|i| {
            let outs = (0..degree)
                .map(|_| rng.gen_range(0..pages))
                .filter(|&j| j != i)
                .map(|j| Page::new(format!("{:04}.html", j)))
                .collect();
            (Page::new(format!("{:04}.html", i)), outs)
        })
        .collect();
    Graph::new(links).unwrap()
}

fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");

    for pages in [10, 100, 1000] {
        let graph = random_graph(pages, 5);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &graph, |b, graph| {
            b.iter(|| transition(black_box(graph), "0000.html", 0.85).unwrap())
        });
    }

    group.finish();
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling");
    group.sample_size(10);

    for pages in [10, 100, 3000] {
        let graph = random_graph(pages, 5);
        group.bench_with_input(BenchmarkId::from_parameter(pages), &graph, |b, graph| {
            b.iter(|| {
                let mut rng = ChaCha8Rng::seed_from_u64(SEED);
                estimate_by_sampling(black_box(graph), 0.85, 10_000, &mut rng).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for pages in [10, 100, 1000] {
        let graph = random_graph(pages, 5);
        for dangling in [DanglingStrategy::Leak, DanglingStrategy::Redistribute] {
            let options = IterationOptions {
                dangling,
                convergence_threshold: 1e-6,
                ..IterationOptions::default()
            };
            group.bench_with_input(
                BenchmarkId::new(dangling.as_str(), pages),
                &graph,
                |b, graph| b.iter(|| iterate(black_box(graph), &options).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_transition, bench_sampling, bench_iteration);
criterion_main!(benches);
