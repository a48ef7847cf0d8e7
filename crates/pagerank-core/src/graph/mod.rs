//! Document link graph

mod link_extractor;
mod link_graph;

pub use link_extractor::{extract_links, filter_links};
pub use link_graph::{Graph, Page};
