//! Dynamic-dimension `f64` vector.
//!
//! A [`Vector`] has its dimension fixed at construction. Every operation
//! except [`Vector::fill`] (and `IndexMut`) returns a new vector.
//!
//! Binary operations that need matching dimensions come in two flavours:
//! the plain method panics on a mismatch, the `try_` method returns a
//! [`VectorError`] instead.
//!
//! ```rust
//! use vecmath::Vector;
//!
//! let v = Vector::from([3.0, 4.0]);
//! assert_eq!(v.norm(), 5.0);
//! assert_eq!(Vector::zero(3).add_vector(&Vector::one(3)), Vector::one(3));
//! ```

mod ops;
mod planar;
mod spatial;

use crate::error::{Result, VectorError};
use crate::math::scaled_norm;
use std::fmt;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, fixed-length sequence of `f64` components.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Vector {
    data: Vec<f64>,
}

/// Unwrap a checked result, panicking with the error message at the
/// caller's location.
#[track_caller]
#[inline]
pub(crate) fn precondition<T>(r: Result<T>) -> T {
    match r {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

impl Vector {
    /// Wrap an owned buffer.
    #[inline]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// `size` components, all 0.0.
    #[inline]
    pub fn zero(size: usize) -> Self {
        Self::filled(size, 0.0)
    }

    /// `size` components, all 1.0.
    #[inline]
    pub fn one(size: usize) -> Self {
        Self::filled(size, 1.0)
    }

    /// `size` components, all equal to `value`.
    #[inline]
    pub fn filled(size: usize, value: f64) -> Self {
        Self { data: vec![value; size] }
    }

    /// `size` components drawn uniformly from [0, 1) with the thread RNG.
    #[cfg(feature = "random")]
    pub fn random(size: usize) -> Self {
        Self::random_with(size, &mut rand::thread_rng())
    }

    /// `size` components drawn uniformly from [0, 1) with `rng`.
    #[cfg(feature = "random")]
    pub fn random_with<R: rand::Rng>(size: usize, rng: &mut R) -> Self {
        debug!(size, "generating random vector");
        Self {
            data: (0..size).map(|_| rng.gen::<f64>()).collect(),
        }
    }

    /// Number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    #[inline]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    /// Euclidean (L2) norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        scaled_norm(&self.data)
    }

    /// Exact component-wise equality. Vectors of different dimension are
    /// never equal.
    pub fn equals(&self, other: &Self) -> bool {
        self.len() == other.len() && self.data.iter().zip(&other.data).all(|(a, b)| a == b)
    }

    /// Component-wise equality within an absolute tolerance `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    /// Direction of `self` with norm 1. A zero vector stays zero.
    pub fn unit(&self) -> Self {
        let l = self.norm();
        if l == 0.0 {
            return Self::zero(self.len());
        }
        self.map(|e| e / l)
    }

    /// Add `s` to every component.
    #[inline]
    pub fn add_scalar(&self, s: f64) -> Self {
        self.map(|e| e + s)
    }

    /// Element-wise sum.
    ///
    /// # Panics
    /// If the dimensions differ.
    #[track_caller]
    pub fn add_vector(&self, other: &Self) -> Self {
        precondition(self.try_add_vector(other))
    }

    pub fn try_add_vector(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtract `s` from every component.
    #[inline]
    pub fn sub_scalar(&self, s: f64) -> Self {
        self.map(|e| e - s)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Panics
    /// If the dimensions differ.
    #[track_caller]
    pub fn sub_vector(&self, other: &Self) -> Self {
        precondition(self.try_sub_vector(other))
    }

    pub fn try_sub_vector(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every component by `factor`.
    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|e| e * factor)
    }

    /// Dot product.
    ///
    /// # Panics
    /// If the dimensions differ.
    #[track_caller]
    pub fn dot(&self, other: &Self) -> f64 {
        precondition(self.try_dot(other))
    }

    pub fn try_dot(&self, other: &Self) -> Result<f64> {
        self.check_same_dim(other)?;
        Ok(self.data.iter().zip(&other.data).map(|(a, b)| a * b).sum())
    }

    /// Euclidean distance, `norm(self - other)`.
    ///
    /// # Panics
    /// If the dimensions differ.
    #[track_caller]
    pub fn distance_to(&self, other: &Self) -> f64 {
        precondition(self.try_distance_to(other))
    }

    pub fn try_distance_to(&self, other: &Self) -> Result<f64> {
        Ok(self.try_sub_vector(other)?.norm())
    }

    /// Overwrite every component with `value`, in place.
    pub fn fill(&mut self, value: f64) {
        self.data.iter_mut().for_each(|e| *e = value);
    }

    /// Components in reverse order.
    pub fn inverse(&self) -> Self {
        Self {
            data: self.data.iter().rev().copied().collect(),
        }
    }

    /// The first `size` components, or `self` zero-padded up to `size`.
    pub fn resize(&self, size: usize) -> Self {
        if size < self.len() {
            trace!(from = self.len(), to = size, "truncating vector");
            return Self::new(self.data[..size].to_vec());
        }
        trace!(from = self.len(), to = size, "zero-padding vector");
        let mut data = Vec::with_capacity(size);
        data.extend_from_slice(&self.data);
        data.resize(size, 0.0);
        Self { data }
    }

    /// `self`'s components followed by `other`'s.
    pub fn concat(&self, other: &Self) -> Self {
        let mut data = Vec::with_capacity(self.len() + other.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Self { data }
    }

    /// Apply `f` to every component.
    #[inline]
    pub fn map<F: FnMut(f64) -> f64>(&self, f: F) -> Self {
        Self {
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    fn zip_with<F: Fn(f64, f64) -> f64>(&self, other: &Self, f: F) -> Result<Self> {
        self.check_same_dim(other)?;
        Ok(Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    pub(crate) fn check_same_dim(&self, other: &Self) -> Result<()> {
        if self.len() != other.len() {
            debug!(expected = self.len(), got = other.len(), "dimension mismatch");
            return Err(VectorError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_dim(&self, required: usize) -> Result<()> {
        if self.len() != required {
            debug!(required, got = self.len(), "wrong dimension for specialised operation");
            return Err(VectorError::WrongDimension {
                required,
                got: self.len(),
            });
        }
        Ok(())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(arr: [f64; N]) -> Self {
        Self::new(arr.to_vec())
    }
}

impl From<&[f64]> for Vector {
    fn from(s: &[f64]) -> Self {
        Self::new(s.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.data[i]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.data[i]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Vector {:?}", self.data)
    }
}

/// A tiny wrapper for printing a `Vector` rounded to `decimals` places.
pub struct Rounded<'a>(pub &'a Vector, pub usize);

impl<'a> Rounded<'a> {
    /// Wrap a `&Vector` for pretty-printing with `decimals` digits.
    #[inline]
    pub fn new(v: &'a Vector, decimals: usize) -> Self {
        Rounded(v, decimals)
    }
}

impl fmt::Display for Rounded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Rounded(v, dec) = *self;
        write!(f, "Vector [")?;
        for (i, e) in v.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{e:.dec$}")?;
        }
        write!(f, "]")
    }
}
