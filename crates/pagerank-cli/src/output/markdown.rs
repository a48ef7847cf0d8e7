//! Markdown output formatter

use super::RankResults;
use pagerank_core::Distribution;

pub fn format_results(results: &RankResults<'_>) -> String {
    let mut output = String::from("# PageRank Results\n\n");

    output.push_str(&format!(
        "## Sampling (n = {})\n\n",
        results.config.samples
    ));
    push_table(&mut output, results.sampling);

    output.push_str(&format!(
        "## Iteration ({} sweeps, dangling: {})\n\n",
        results.iteration.sweeps, results.config.dangling
    ));
    push_table(&mut output, &results.iteration.ranks);

    output
}

fn push_table(output: &mut String, ranks: &Distribution) {
    output.push_str("| Page | Rank |\n|------|------|\n");
    for (page, rank) in ranks.iter() {
        output.push_str(&format!("| `{}` | {:.4} |\n", page, rank));
    }
    output.push('\n');
}
