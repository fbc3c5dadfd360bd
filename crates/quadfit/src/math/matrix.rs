use std::fmt;
use std::ops::{Mul, Neg};

use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use crate::math::vector::{dot_unchecked, Vec2, Vector};

/// `|det|` below this is treated as singular by [`Mat2::inverse`].
///
/// An empirical cut-off rather than a derived bound; use
/// [`Mat2::inverse_with_threshold`] to tune it.
pub const DEFAULT_DETERMINANT_THRESHOLD: f64 = 1e-3;

/// Dense 2x2 matrix stored as its four scalars, column-major:
/// column 1 is `(a, b)`, column 2 is `(c, d)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mat2 {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Mat2 {
    pub fn from_columns(col1: Vec2, col2: Vec2) -> Self {
        Self {
            a: col1.x(),
            b: col1.y(),
            c: col2.x(),
            d: col2.y(),
        }
    }

    pub fn identity() -> Self {
        Self::from_columns(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0))
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Closed-form inverse, refused when `|det| < DEFAULT_DETERMINANT_THRESHOLD`.
    pub fn inverse(&self) -> Result<Mat2> {
        self.inverse_with_threshold(DEFAULT_DETERMINANT_THRESHOLD)
    }

    /// Closed-form inverse, refused when `|det| < threshold`.
    ///
    /// A NaN determinant is refused as well.
    pub fn inverse_with_threshold(&self, threshold: f64) -> Result<Mat2> {
        let det = self.determinant();
        if det.is_nan() || det.abs() < threshold {
            return Err(LinalgError::SmallDeterminant {
                determinant: det,
                threshold,
            });
        }
        Ok(Mat2::from_columns(
            Vec2::new(self.d / det, -self.b / det),
            Vec2::new(-self.c / det, self.a / det),
        ))
    }

    pub fn row1(&self) -> Vec2 {
        Vec2::new(self.a, self.c)
    }

    pub fn row2(&self) -> Vec2 {
        Vec2::new(self.b, self.d)
    }

    pub fn col1(&self) -> Vec2 {
        Vec2::new(self.a, self.b)
    }

    pub fn col2(&self) -> Vec2 {
        Vec2::new(self.c, self.d)
    }

    pub fn transpose(&self) -> Mat2 {
        Mat2::from_columns(self.row1(), self.row2())
    }

    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (self.b - self.c).abs() <= tolerance
    }

    /// Matrix-vector product against any vector of length 2.
    pub fn apply<V: Vector + ?Sized>(&self, v: &V) -> Result<Vec2> {
        LinalgError::check_len(2, v.len())?;
        let values = v.as_slice();
        Ok(*self * Vec2::new(values[0], values[1]))
    }
}

fn dot2(lhs: Vec2, rhs: Vec2) -> f64 {
    dot_unchecked(lhs.as_slice(), rhs.as_slice())
}

/// `self` on the left: rows of `self` against columns of `rhs`.
impl Mul for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        let (r1, r2) = (self.row1(), self.row2());
        let (c1, c2) = (rhs.col1(), rhs.col2());
        Mat2::from_columns(
            Vec2::new(dot2(r1, c1), dot2(r2, c1)),
            Vec2::new(dot2(r1, c2), dot2(r2, c2)),
        )
    }
}

impl Mul<Vec2> for Mat2 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(dot2(self.row1(), rhs), dot2(self.row2(), rhs))
    }
}

impl Mul<f64> for Mat2 {
    type Output = Mat2;

    fn mul(self, rhs: f64) -> Mat2 {
        Mat2::from_columns(self.col1() * rhs, self.col2() * rhs)
    }
}

impl Mul<Mat2> for f64 {
    type Output = Mat2;

    fn mul(self, rhs: Mat2) -> Mat2 {
        rhs * self
    }
}

impl Neg for Mat2 {
    type Output = Mat2;

    fn neg(self) -> Mat2 {
        self * -1.0
    }
}

impl One for Mat2 {
    fn one() -> Self {
        Mat2::identity()
    }
}

impl fmt::Display for Mat2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.3} {:.3}\n{:.3} {:.3}",
            self.a, self.c, self.b, self.d
        )
    }
}
