//! PageRank estimation
//!
//! Two independent estimators of the stationary distribution of the damped
//! random-surfer chain:
//! - [`estimate_by_sampling`]: Monte-Carlo random walk driven by [`transition`]
//! - [`estimate_by_iteration`]: power iteration of the PageRank recurrence

mod distribution;
mod iteration;
mod sampling;
mod transition;

pub use distribution::Distribution;
pub use iteration::{
    estimate_by_iteration, iterate, sweep, DanglingStrategy, IterationOptions, IterationReport,
};
pub use sampling::{estimate_by_sampling, weighted_choice};
pub use transition::transition;

use crate::error::{PageRankError, Result};

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(PageRankError::InvalidParameter(format!(
            "damping must be in (0, 1), got {}",
            damping
        )))
    }
}

pub(crate) fn check_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() && threshold > 0.0 {
        Ok(())
    } else {
        Err(PageRankError::InvalidParameter(format!(
            "convergence threshold must be a positive number, got {}",
            threshold
        )))
    }
}

pub(crate) fn check_positive(name: &str, value: usize) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(PageRankError::InvalidParameter(format!(
            "{} must be greater than zero",
            name
        )))
    }
}
