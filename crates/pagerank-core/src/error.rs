//! Error types for pagerank

use thiserror::Error;

/// Result type alias using PageRankError
pub type Result<T> = std::result::Result<T, PageRankError>;

/// Error type alias for convenience
pub type Error = PageRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const INVALID_INPUT: i32 = 3;
    pub const NOT_CONVERGED: i32 = 4;
}

/// Main error type for pagerank
#[derive(Debug, Error)]
pub enum PageRankError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Power iteration did not converge after {iterations} sweeps (last delta {delta:.6})")]
    NotConverged { iterations: usize, delta: f64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PageRankError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidGraph(_)
            | Self::InvalidParameter(_)
            | Self::Config(_)
            | Self::Yaml(_) => exit_codes::INVALID_INPUT,
            Self::NotConverged { .. } => exit_codes::NOT_CONVERGED,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
