//! Link extraction from HTML documents

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref ANCHOR_HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
}

/// Extract the `href` target of every `<a>` element, deduplicated.
///
/// Targets are returned verbatim; filtering against the corpus happens when
/// the graph is assembled.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    ANCHOR_HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|target| target.as_str().to_string())
        .collect()
}

/// Drop the page itself and every target outside `corpus`
pub fn filter_links(
    links: BTreeSet<String>,
    source: &str,
    corpus: &BTreeSet<String>,
) -> BTreeSet<String> {
    links
        .into_iter()
        .filter(|target| target != source && corpus.contains(target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor_links() {
        let content = r#"<html><body>
            <a href="2.html">Two</a>
            <a class="nav" href="3.html">Three</a>
            <a href="2.html">Two again</a>
        </body></html>"#;

        let links = extract_links(content);
        let expected: BTreeSet<String> =
            ["2.html", "3.html"].iter().map(|s| s.to_string()).collect();
        assert_eq!(links, expected);
    }

    #[test]
    fn test_ignores_non_anchor_href() {
        let content = r#"<link href="style.css"><a name="top">Top</a>"#;
        assert!(extract_links(content).is_empty());
    }

    #[test]
    fn test_filter_links_drops_self_and_outside() {
        let corpus: BTreeSet<String> =
            ["1.html", "2.html"].iter().map(|s| s.to_string()).collect();
        let links: BTreeSet<String> = ["1.html", "2.html", "https://example.com"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let filtered = filter_links(links, "1.html", &corpus);
        assert_eq!(filtered.len(), 1);
        assert!(filtered.contains("2.html"));
    }
}
