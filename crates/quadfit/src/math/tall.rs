use crate::error::{LinalgError, Result};
use crate::math::matrix::Mat2;
use crate::math::vector::{dot_unchecked, Vec2, VecN, Vector};

/// An N x 2 matrix held as its two columns.
///
/// Either column may be a `Vec2` or a `VecN`; both always have the same
/// length.
#[derive(Clone, Debug, PartialEq)]
pub struct TallMat2<A = VecN, B = A> {
    col1: A,
    col2: B,
}

impl<A: Vector, B: Vector> TallMat2<A, B> {
    /// Fails with `DimensionMismatch` when the columns differ in length.
    ///
    /// Two empty columns are accepted: the resulting 0 x 2 matrix has an
    /// all-zero Gramian, so a fit on it fails later with `SmallDeterminant`.
    pub fn new(col1: A, col2: B) -> Result<Self> {
        LinalgError::check_len(col1.len(), col2.len())?;
        Ok(Self { col1, col2 })
    }

    pub fn nrows(&self) -> usize {
        self.col1.len()
    }

    pub fn col1(&self) -> &A {
        &self.col1
    }

    pub fn col2(&self) -> &B {
        &self.col2
    }

    /// `Qᵗ·Q`: the pairwise dot products of the two columns. Always symmetric.
    pub fn gramian(&self) -> Mat2 {
        let (c1, c2) = (self.col1.as_slice(), self.col2.as_slice());
        let a = dot_unchecked(c1, c1);
        let b = dot_unchecked(c1, c2);
        let d = dot_unchecked(c2, c2);
        Mat2::from_columns(Vec2::new(a, b), Vec2::new(b, d))
    }

    /// `Qᵗ·v`: each column dotted with `v`.
    pub fn project_onto<V: Vector + ?Sized>(&self, v: &V) -> Result<Vec2> {
        LinalgError::check_len(self.nrows(), v.len())?;
        Ok(Vec2::new(
            dot_unchecked(self.col1.as_slice(), v.as_slice()),
            dot_unchecked(self.col2.as_slice(), v.as_slice()),
        ))
    }

    /// `Q·x`: the linear combination `x.x * col1 + x.y * col2`.
    pub fn apply(&self, x: Vec2) -> VecN {
        self.col1
            .iter()
            .zip(self.col2.iter())
            .map(|(u, w)| x.x() * u + x.y() * w)
            .collect()
    }
}
