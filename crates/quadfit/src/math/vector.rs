use std::fmt;
use std::iter::{Copied, FromIterator};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::slice::Iter;

use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};

/// Capability shared by the fixed-arity `Vec2` and the dynamic-arity `VecN`.
///
/// Everything is expressed over the component slice, so mixed operands
/// (`Vec2` against a `VecN` of length 2) go through the same code path in
/// either argument order.
pub trait Vector {
    fn as_slice(&self) -> &[f64];

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Components in order. Each call starts a fresh pass.
    fn iter(&self) -> Copied<Iter<'_, f64>> {
        self.as_slice().iter().copied()
    }

    fn dot<V: Vector + ?Sized>(&self, other: &V) -> Result<f64> {
        dot(self, other)
    }

    /// Euclidean length, accumulated with `hypot` so tiny components do not
    /// underflow to zero and large ones do not overflow.
    fn norm(&self) -> f64 {
        self.iter().fold(0.0, f64::hypot)
    }

    fn to_dynamic(&self) -> VecN {
        VecN::from_vec(self.as_slice().to_vec())
    }
}

/// Dot product of two vectors of equal length.
pub fn dot<A, B>(lhs: &A, rhs: &B) -> Result<f64>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    LinalgError::check_len(lhs.len(), rhs.len())?;
    Ok(dot_unchecked(lhs.as_slice(), rhs.as_slice()))
}

/// Elementwise sum of two vectors of equal length.
pub fn add<A, B>(lhs: &A, rhs: &B) -> Result<VecN>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    LinalgError::check_len(lhs.len(), rhs.len())?;
    Ok(lhs.iter().zip(rhs.iter()).map(|(a, b)| a + b).collect())
}

/// `lhs + (-rhs)`.
pub fn sub<A, B>(lhs: &A, rhs: &B) -> Result<VecN>
where
    A: Vector + ?Sized,
    B: Vector + ?Sized,
{
    add(lhs, &-rhs.to_dynamic())
}

/// Callers must have checked the lengths already.
pub(crate) fn dot_unchecked(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

fn fmt_components(f: &mut fmt::Formatter<'_>, values: &[f64]) -> fmt::Result {
    write!(f, "(")?;
    for (idx, value) in values.iter().enumerate() {
        write!(f, "{:.3}", value)?;
        if idx + 1 != values.len() {
            write!(f, ", ")?;
        }
    }
    write!(f, ")")
}

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A vector with exactly two components.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2 {
    data: [f64; 2],
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { data: [x, y] }
    }

    pub fn x(&self) -> f64 {
        self.data[0]
    }

    pub fn y(&self) -> f64 {
        self.data[1]
    }

    pub fn checked_div(self, scalar: f64) -> Result<Self> {
        if scalar == 0.0 {
            return Err(LinalgError::DivideByZero);
        }
        Ok(self / scalar)
    }

    pub fn normalized(self) -> Result<Self> {
        self.checked_div(self.norm())
    }
}

impl Vector for Vec2 {
    fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self { data: value }
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        value.data
    }
}

impl TryFrom<&VecN> for Vec2 {
    type Error = LinalgError;

    fn try_from(value: &VecN) -> Result<Self> {
        LinalgError::check_len(2, value.len())?;
        Ok(Vec2::new(value[0], value[1]))
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x() + rhs.x(), self.y() + rhs.y())
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        self + -rhs
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        self * -1.0
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x() * rhs, self.y() * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

/// Division by exactly zero follows IEEE semantics; use `checked_div` to
/// reject it.
impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x() / rhs, self.y() / rhs)
    }
}

impl Zero for Vec2 {
    fn zero() -> Self {
        Vec2::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.data.iter().all(|v| *v == 0.0)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, &self.data)
    }
}

// ---------------------------------------------------------------------------
// VecN
// ---------------------------------------------------------------------------

/// A vector whose arity is chosen at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VecN {
    data: Vec<f64>,
}

impl VecN {
    pub fn from_vec(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn zeros(len: usize) -> Self {
        Self::from_vec(vec![0.0; len])
    }

    pub fn mapv<F>(&self, f: F) -> VecN
    where
        F: FnMut(f64) -> f64,
    {
        self.iter().map(f).collect()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn checked_add<V: Vector + ?Sized>(&self, other: &V) -> Result<VecN> {
        add(self, other)
    }

    pub fn checked_sub<V: Vector + ?Sized>(&self, other: &V) -> Result<VecN> {
        sub(self, other)
    }

    pub fn checked_div(&self, scalar: f64) -> Result<VecN> {
        if scalar == 0.0 {
            return Err(LinalgError::DivideByZero);
        }
        Ok(self / scalar)
    }

    pub fn normalized(&self) -> Result<VecN> {
        self.checked_div(self.norm())
    }
}

impl Vector for VecN {
    fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl From<Vec<f64>> for VecN {
    fn from(value: Vec<f64>) -> Self {
        VecN::from_vec(value)
    }
}

impl From<VecN> for Vec<f64> {
    fn from(value: VecN) -> Self {
        value.data
    }
}

impl From<Vec2> for VecN {
    fn from(value: Vec2) -> Self {
        value.to_dynamic()
    }
}

impl FromIterator<f64> for VecN {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        VecN::from_vec(iter.into_iter().collect())
    }
}

impl Index<usize> for VecN {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

/// Panics when the lengths differ; `checked_add` reports it instead.
impl<'a, 'b> Add<&'b VecN> for &'a VecN {
    type Output = VecN;

    fn add(self, rhs: &'b VecN) -> VecN {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Addition requires vectors of equal length"
        );
        self.iter().zip(rhs.iter()).map(|(a, b)| a + b).collect()
    }
}

impl<'a, 'b> Sub<&'b VecN> for &'a VecN {
    type Output = VecN;

    fn sub(self, rhs: &'b VecN) -> VecN {
        self + &-rhs
    }
}

impl<'a> Neg for &'a VecN {
    type Output = VecN;

    fn neg(self) -> VecN {
        self * -1.0
    }
}

impl Neg for VecN {
    type Output = VecN;

    fn neg(self) -> VecN {
        -&self
    }
}

impl<'a> Mul<f64> for &'a VecN {
    type Output = VecN;

    fn mul(self, rhs: f64) -> VecN {
        self.mapv(|v| v * rhs)
    }
}

impl Mul<f64> for VecN {
    type Output = VecN;

    fn mul(self, rhs: f64) -> VecN {
        &self * rhs
    }
}

impl<'a> Mul<&'a VecN> for f64 {
    type Output = VecN;

    fn mul(self, rhs: &'a VecN) -> VecN {
        rhs * self
    }
}

impl Mul<VecN> for f64 {
    type Output = VecN;

    fn mul(self, rhs: VecN) -> VecN {
        &rhs * self
    }
}

impl<'a> Div<f64> for &'a VecN {
    type Output = VecN;

    fn div(self, rhs: f64) -> VecN {
        self.mapv(|v| v / rhs)
    }
}

impl Div<f64> for VecN {
    type Output = VecN;

    fn div(self, rhs: f64) -> VecN {
        &self / rhs
    }
}

impl fmt::Display for VecN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_components(f, &self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_rounds_to_three_decimals() {
        assert_eq!(Vec2::new(0.12345, -4.5).to_string(), "(0.123, -4.500)");
        assert_eq!(VecN::from_vec(vec![1.0, 2.0006, 3.0]).to_string(), "(1.000, 2.001, 3.000)");
        assert_eq!(VecN::from_vec(vec![]).to_string(), "()");
    }

    #[test]
    fn dot_unchecked_sums_products() {
        assert_eq!(dot_unchecked(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
        assert_eq!(dot_unchecked(&[], &[]), 0.0);
    }

    #[test]
    fn iter_restarts_from_first_component() {
        let v = VecN::from_vec(vec![1.0, 2.0, 3.0]);
        let first: Vec<f64> = v.iter().collect();
        let second: Vec<f64> = v.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![1.0, 2.0, 3.0]);
    }
}
