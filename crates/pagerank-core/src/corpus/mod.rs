//! Corpus loading: a directory of HTML pages into a link graph

mod scanner;

pub use scanner::{scan_files, ScanOptions, ScanResult};

use crate::error::Result;
use crate::graph::{extract_links, filter_links, Graph, Page};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Parse every HTML page directly under `directory` into a link graph.
///
/// Pages are identified by file name. Self-links and links to files outside
/// the corpus are dropped.
pub fn crawl(directory: &Path) -> Result<Graph> {
    crawl_with(directory, &ScanOptions::default())
}

/// Like [`crawl`], with explicit scan options
pub fn crawl_with(directory: &Path, options: &ScanOptions) -> Result<Graph> {
    let files = scan_files(directory, options)?;

    let mut raw_links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for file in &files {
        let bytes = std::fs::read(&file.path)?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            tracing::warn!("{} is not valid UTF-8, invalid bytes replaced", file.file_name);
        }
        raw_links.insert(file.file_name.clone(), extract_links(&content));
    }

    let corpus: BTreeSet<String> = raw_links.keys().cloned().collect();
    let mut links: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
    for (name, targets) in raw_links {
        let found = targets.len();
        let kept = filter_links(targets, &name, &corpus);
        tracing::debug!("{}: {} links, {} inside corpus", name, found, kept.len());
        links.insert(Page::new(name), kept.into_iter().map(Page::new).collect());
    }

    let graph = Graph::new(links)?;
    tracing::info!(
        "Loaded corpus {} with {} pages and {} links",
        directory.display(),
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}
