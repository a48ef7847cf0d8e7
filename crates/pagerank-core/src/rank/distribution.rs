//! Probability distribution over the pages of a graph

use crate::graph::{Graph, Page};
use serde::Serialize;
use std::collections::BTreeMap;

/// One value per page of a graph, iterated in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution(BTreeMap<Page, f64>);

impl Distribution {
    /// 1/N for every page
    pub fn uniform(graph: &Graph) -> Self {
        let share = 1.0 / graph.len() as f64;
        graph.pages().map(|page| (page.clone(), share)).collect()
    }

    pub fn get(&self, page: &str) -> Option<f64> {
        self.0.get(page).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Page, f64)> {
        self.0.iter().map(|(page, value)| (page, *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all values
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Sum of absolute per-page differences; pages missing on one side count as 0
    pub fn l1_distance(&self, other: &Distribution) -> f64 {
        self.diffs(other).sum()
    }

    /// Largest absolute per-page difference
    pub fn max_abs_diff(&self, other: &Distribution) -> f64 {
        self.diffs(other).fold(0.0, f64::max)
    }

    /// Page with the highest value, ties broken by page order
    pub fn top(&self) -> Option<(&Page, f64)> {
        self.iter().fold(None, |best, (page, value)| match best {
            Some((_, best_value)) if best_value >= value => best,
            _ => Some((page, value)),
        })
    }

    fn diffs<'a>(&'a self, other: &'a Distribution) -> impl Iterator<Item = f64> + 'a {
        let left = self
            .0
            .iter()
            .map(move |(page, value)| (value - other.get(page.as_str()).unwrap_or(0.0)).abs());
        let right = other
            .0
            .iter()
            .filter(move |(page, _)| !self.0.contains_key(page.as_str()))
            .map(|(_, value)| value.abs());
        left.chain(right)
    }
}

impl FromIterator<(Page, f64)> for Distribution {
    fn from_iter<I: IntoIterator<Item = (Page, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Distribution {
    type Item = (Page, f64);
    type IntoIter = std::collections::btree_map::IntoIter<Page, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
