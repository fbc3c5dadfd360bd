//! quadfit: a normal-equations least-squares fit of `p ≈ c1·z + c2·z²`.
//!
//! The crate provides the small linear-algebra toolkit the fit needs
//! (`Vec2`, `VecN`, `Mat2`, `TallMat2`), the solver built on it, and its
//! configuration. Everything is a pure computation over value types; the
//! crate performs no I/O and no logging.
pub mod config;
pub mod error;
pub mod lstsq;
pub mod math;

pub use config::SolverConfig;
pub use error::{LinalgError, Result};
pub use lstsq::{fit_quadratic, Coefficients, QuadraticSolver};
