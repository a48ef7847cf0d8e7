//! Terminal output formatter

use super::RankResults;
use pagerank_core::{Distribution, Graph};

pub fn format_results(results: &RankResults<'_>) -> String {
    let mut output = format!(
        "PageRank Results from Sampling (n = {})\n",
        results.config.samples
    );
    push_ranks(&mut output, results.sampling);

    output.push_str("PageRank Results from Iteration\n");
    push_ranks(&mut output, &results.iteration.ranks);

    output
}

fn push_ranks(output: &mut String, ranks: &Distribution) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("  {}: {:.4}\n", page, rank));
    }
}

/// Corpus listing: page count, then every page with its links
pub fn format_graph(graph: &Graph) -> String {
    let mut output = format!("Total pages = {}\n", graph.len());

    for (page, links) in graph.iter() {
        let targets: Vec<&str> = links.iter().map(|link| link.as_str()).collect();
        output.push_str(&format!(
            "page: {}, links: [{}], link count = {}\n",
            page,
            targets.join(", "),
            links.len()
        ));
    }

    output
}
