//! Static directed link graph

use crate::error::{PageRankError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Corpus-unique page identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Page(String);

impl Page {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Page {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Page {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Page {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Directed link graph: every page maps to the set of pages it links to.
///
/// Construction validates that the graph is non-empty, that no page links to
/// itself and that every link target is itself a page. After that the graph
/// is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    links: BTreeMap<Page, BTreeSet<Page>>,
}

impl Graph {
    /// Build a graph from an adjacency mapping
    pub fn new(links: BTreeMap<Page, BTreeSet<Page>>) -> Result<Self> {
        if links.is_empty() {
            return Err(PageRankError::InvalidGraph(
                "graph has no pages".to_string(),
            ));
        }

        for (page, targets) in &links {
            for target in targets {
                if target == page {
                    return Err(PageRankError::InvalidGraph(format!(
                        "page '{}' links to itself",
                        page
                    )));
                }
                if !links.contains_key(target) {
                    return Err(PageRankError::InvalidGraph(format!(
                        "page '{}' links to '{}', which is not in the graph",
                        page, target
                    )));
                }
            }
        }

        Ok(Self { links })
    }

    /// Build a graph from `(page, [targets])` pairs
    pub fn from_adjacency<'a, I, L>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, L)>,
        L: IntoIterator<Item = &'a str>,
    {
        let mut links: BTreeMap<Page, BTreeSet<Page>> = BTreeMap::new();
        for (page, targets) in entries {
            links
                .entry(Page::from(page))
                .or_default()
                .extend(targets.into_iter().map(Page::from));
        }
        Self::new(links)
    }

    /// Number of pages (N)
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Pages in identifier order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.links.keys()
    }

    /// Pages with their out-links, in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&Page, &BTreeSet<Page>)> {
        self.links.iter()
    }

    pub fn get_page(&self, page: &str) -> Option<&Page> {
        self.links.get_key_value(page).map(|(key, _)| key)
    }

    pub fn out_links(&self, page: &str) -> Option<&BTreeSet<Page>> {
        self.links.get(page)
    }

    pub fn out_degree(&self, page: &str) -> Option<usize> {
        self.links.get(page).map(|targets| targets.len())
    }

    /// Whether `from` links to `to`
    pub fn links_to(&self, from: &str, to: &str) -> bool {
        self.links
            .get(from)
            .map(|targets| targets.contains(to))
            .unwrap_or(false)
    }

    /// Total number of links
    pub fn edge_count(&self) -> usize {
        self.links.values().map(|targets| targets.len()).sum()
    }

    /// Pages without out-links
    pub fn dangling(&self) -> impl Iterator<Item = &Page> {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    /// Reverse adjacency: for every page, the pages linking to it.
    ///
    /// Every page has an entry, possibly empty.
    pub fn incoming(&self) -> BTreeMap<&Page, Vec<&Page>> {
        let mut incoming: BTreeMap<&Page, Vec<&Page>> =
            self.links.keys().map(|page| (page, Vec::new())).collect();

        for (source, targets) in &self.links {
            for target in targets {
                if let Some(sources) = incoming.get_mut(target) {
                    sources.push(source);
                }
            }
        }

        incoming
    }
}
