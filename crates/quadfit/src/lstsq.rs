//! Quadratic least-squares fit through the normal equations.
//!
//! The model is `p ≈ c1·z + c2·z²` (no intercept). With the design matrix
//! `Q = [z, z²]` the coefficients solve `(QᵗQ)·c = Qᵗ·p`, which for two basis
//! columns is a 2x2 system inverted in closed form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::SolverConfig;
use crate::error::{LinalgError, Result};
use crate::math::{TallMat2, Vec2, VecN, Vector};

/// Fitted `(c1, c2)` of `p ≈ c1·z + c2·z²`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub c1: f64,
    pub c2: f64,
}

impl Coefficients {
    pub fn new(c1: f64, c2: f64) -> Self {
        Self { c1, c2 }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.c1, self.c2)
    }

    /// Model value at `z`.
    pub fn evaluate(&self, z: f64) -> f64 {
        self.c1 * z + self.c2 * z * z
    }

    pub fn predict<V: Vector + ?Sized>(&self, z: &V) -> VecN {
        z.iter().map(|v| self.evaluate(v)).collect()
    }

    /// `p_i - model(z_i)` for every sample.
    pub fn residuals<Z, P>(&self, z: &Z, p: &P) -> Result<VecN>
    where
        Z: Vector + ?Sized,
        P: Vector + ?Sized,
    {
        LinalgError::check_len(z.len(), p.len())?;
        Ok(z.iter()
            .zip(p.iter())
            .map(|(z, p)| p - self.evaluate(z))
            .collect())
    }
}

impl From<Vec2> for Coefficients {
    fn from(value: Vec2) -> Self {
        Coefficients::new(value.x(), value.y())
    }
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}, {:.3}", self.c1, self.c2)
    }
}

/// Stateless solver; every `fit` is independent of the previous ones.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadraticSolver {
    config: SolverConfig,
}

impl QuadraticSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The N x 2 design matrix with columns `z` and `z²`.
    pub fn design_matrix<V: Vector + ?Sized>(z: &V) -> Result<TallMat2> {
        let z = z.to_dynamic();
        let z_squared = z.mapv(|v| v * v);
        TallMat2::new(z, z_squared)
    }

    /// Fit `p ≈ c1·z + c2·z²`.
    ///
    /// Fails with `DimensionMismatch` when `z` and `p` differ in length and
    /// with `SmallDeterminant` when the basis columns are too close to
    /// collinear (including too few samples) for a stable inverse.
    pub fn fit<Z, P>(&self, z: &Z, p: &P) -> Result<Coefficients>
    where
        Z: Vector + ?Sized,
        P: Vector + ?Sized,
    {
        let q = Self::design_matrix(z)?;
        let gram = q.gramian();
        let rhs = q.project_onto(p)?;
        let inverse = gram.inverse_with_threshold(self.config.determinant_threshold)?;
        Ok(Coefficients::from(inverse * rhs))
    }
}

/// [`QuadraticSolver::fit`] with the default configuration.
pub fn fit_quadratic<Z, P>(z: &Z, p: &P) -> Result<Coefficients>
where
    Z: Vector + ?Sized,
    P: Vector + ?Sized,
{
    QuadraticSolver::default().fit(z, p)
}
