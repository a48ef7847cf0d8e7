//! PageRank Core Library
//!
//! Ranks the pages of a small hyperlink corpus.
//!
//! # Features
//! - HTML corpus loading into a validated link graph
//! - Damped random-surfer transition model
//! - Monte-Carlo estimation from a seeded or entropy-driven random walk
//! - Power iteration with a sweep limit and configurable dangling-page handling

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::RankConfig;
pub use corpus::crawl;
pub use error::{Error, PageRankError, Result};
pub use graph::{Graph, Page};
pub use rank::{
    estimate_by_iteration, estimate_by_sampling, iterate, sweep, transition, weighted_choice,
    DanglingStrategy, Distribution, IterationOptions, IterationReport,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "pagerank";
