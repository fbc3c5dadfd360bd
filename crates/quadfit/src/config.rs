use serde::{Deserialize, Serialize};

use crate::math::DEFAULT_DETERMINANT_THRESHOLD;

/// Tunables for [`QuadraticSolver`](crate::lstsq::QuadraticSolver).
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// Normal-equation systems whose Gramian has `|det|` below this are
    /// rejected as ill-conditioned.
    pub determinant_threshold: f64,
}

impl SolverConfig {
    pub fn new(determinant_threshold: f64) -> Self {
        Self {
            determinant_threshold,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            determinant_threshold: DEFAULT_DETERMINANT_THRESHOLD,
        }
    }
}
