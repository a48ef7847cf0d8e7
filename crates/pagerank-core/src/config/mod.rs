//! Configuration management

use crate::error::{PageRankError, Result};
use crate::rank::{check_damping, check_positive, check_threshold, DanglingStrategy, IterationOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Probability of following a link rather than teleporting
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Random-walk length for the sampling estimator
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Power-iteration stopping delta
pub const DEFAULT_CONVERGENCE_THRESHOLD: f64 = 0.005;

/// Power-iteration sweep limit
pub const DEFAULT_MAX_ITERATIONS: usize = 1_000;

/// Ranking parameters shared by both estimators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Steps taken by the random walk
    #[serde(default = "default_samples")]
    pub samples: usize,

    #[serde(default = "default_threshold")]
    pub convergence_threshold: f64,

    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    #[serde(default)]
    pub dangling: DanglingStrategy,

    /// Seed for the random walk; unseeded runs draw from OS entropy
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            convergence_threshold: default_threshold(),
            max_iterations: default_max_iterations(),
            dangling: DanglingStrategy::default(),
            seed: default_seed(),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(fallback)
}

fn default_damping() -> f64 {
    env_or("PAGERANK_DAMPING", DEFAULT_DAMPING)
}

fn default_samples() -> usize {
    env_or("PAGERANK_SAMPLES", DEFAULT_SAMPLES)
}

fn default_threshold() -> f64 {
    env_or("PAGERANK_THRESHOLD", DEFAULT_CONVERGENCE_THRESHOLD)
}

fn default_max_iterations() -> usize {
    env_or("PAGERANK_MAX_ITERATIONS", DEFAULT_MAX_ITERATIONS)
}

fn default_seed() -> Option<u64> {
    std::env::var("PAGERANK_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
}

impl RankConfig {
    /// Load config from default path
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(RankConfig::default())
        }
    }

    /// Load config from an explicit YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PageRankError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: RankConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    /// Reject parameters the estimators cannot work with
    pub fn validate(&self) -> Result<()> {
        check_damping(self.damping)?;
        check_positive("sample count", self.samples)?;
        check_threshold(self.convergence_threshold)?;
        check_positive("max iterations", self.max_iterations)?;
        Ok(())
    }

    /// Power-iteration parameters of this configuration
    pub fn iteration_options(&self) -> IterationOptions {
        IterationOptions {
            damping: self.damping,
            convergence_threshold: self.convergence_threshold,
            max_iterations: self.max_iterations,
            dangling: self.dangling,
        }
    }
}
