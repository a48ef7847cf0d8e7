//! CSV output formatter

use super::RankResults;
use pagerank_core::Distribution;

pub fn format_results(results: &RankResults<'_>) -> String {
    let mut output = String::from("estimator,page,rank\n");
    push_rows(&mut output, "sampling", results.sampling);
    push_rows(&mut output, "iteration", &results.iteration.ranks);
    output
}

fn push_rows(output: &mut String, estimator: &str, ranks: &Distribution) {
    for (page, rank) in ranks.iter() {
        output.push_str(&format!(
            "{},{},{:.4}\n",
            estimator,
            escape_csv(page.as_str()),
            rank
        ));
    }
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
