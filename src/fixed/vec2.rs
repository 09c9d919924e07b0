// src/fixed/vec2.rs
//! A 2-D Euclidean vector with compile-time dimension.

use crate::error::VectorError;
use crate::math::{scaled_norm, PARALLEL_EPSILON};
use crate::vector::Vector;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2-D Euclidean vector.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    #[inline(always)]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// The unit vector `(cos(angle), sin(angle))`.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s)
    }

    #[inline(always)]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product of the two vectors lifted to z = 0.
    #[inline(always)]
    pub fn perp_dot(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean norm, computed without intermediate overflow.
    #[inline]
    pub fn norm(&self) -> f64 {
        scaled_norm(&[self.x, self.y])
    }

    /// Direction with norm 1; the zero vector maps to itself.
    #[inline]
    pub fn unit(&self) -> Self {
        let l = self.norm();
        if l == 0.0 {
            return Self::zero();
        }
        Self::new(self.x / l, self.y / l)
    }

    #[inline(always)]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }

    /// Projection of `self` onto `u`.
    #[inline]
    pub fn project_on(&self, u: &Self) -> Self {
        u.unit().scale(self.dot(u) / u.norm())
    }

    /// Rotate counter-clockwise by `angle` radians.
    #[inline]
    pub fn rotate(&self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    #[inline]
    pub fn is_parallel_to(&self, u: &Self) -> bool {
        self.perp_dot(u).abs() < PARALLEL_EPSILON
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(arr: [f64; 2]) -> Vec2 {
        Vec2::new(arr[0], arr[1])
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(v: Vec2) -> [f64; 2] {
        [v.x, v.y]
    }
}

impl From<Vec2> for Vector {
    fn from(v: Vec2) -> Vector {
        Vector::new(vec![v.x, v.y])
    }
}

impl TryFrom<&Vector> for Vec2 {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Self, Self::Error> {
        v.check_dim(2)?;
        Ok(Vec2::new(v[0], v[1]))
    }
}

impl TryFrom<Vector> for Vec2 {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<Self, Self::Error> {
        Vec2::try_from(&v)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline(always)]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}
