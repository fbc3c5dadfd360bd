//! Error types for quadfit.

use thiserror::Error;

/// Result type alias for linear-algebra and fitting operations.
pub type Result<T> = std::result::Result<T, LinalgError>;

/// Failures raised by vector, matrix and least-squares operations.
///
/// Every variant is a precondition failure: callers receive it immediately
/// and no partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    /// Two operands that must share an arity do not.
    #[error("Dimension mismatch: expected length {expected}, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// Inversion refused because the determinant is too close to zero.
    #[error("Determinant {determinant:e} is below the inversion threshold {threshold:e}")]
    SmallDeterminant { determinant: f64, threshold: f64 },
    /// Division by an exactly-zero scalar, including normalizing a zero vector.
    #[error("Division by zero")]
    DivideByZero,
}

impl LinalgError {
    pub(crate) fn check_len(expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch { expected, found })
        }
    }
}
