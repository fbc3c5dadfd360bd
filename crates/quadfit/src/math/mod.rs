//! Small fixed-shape linear algebra used by the least-squares fit.
//!
//! `Vec2` and `VecN` share the [`Vector`] capability, `Mat2` is a dense 2x2
//! matrix and `TallMat2` an N x 2 matrix that reduces to a `Mat2` through its
//! Gramian.
pub mod matrix;
pub mod tall;
pub mod vector;

pub use matrix::{Mat2, DEFAULT_DETERMINANT_THRESHOLD};
pub use tall::TallMat2;
pub use vector::{add, dot, sub, Vec2, VecN, Vector};
