// src/fixed/vec3.rs
//! Three-component vector with the dimension in the type.

use crate::error::VectorError;
use crate::math::scaled_norm;
use crate::vector::Vector;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point or direction in 3-space. `cross` needs no dimension check here.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline(always)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline(always)]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Apply `f` to each component.
    #[inline]
    pub fn map<F: Fn(f64) -> f64>(self, f: F) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combine matching components of `self` and `rhs` with `f`.
    #[inline]
    pub fn zip_with<F: Fn(f64, f64) -> f64>(self, rhs: Self, f: F) -> Self {
        Self::new(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> f64 {
        let p = self.zip_with(*rhs, |a, b| a * b);
        p.x + p.y + p.z
    }

    /// Same component formula as [`Vector::cross`].
    #[inline]
    pub fn cross(&self, u: &Self) -> Self {
        let v = self;
        Self::new(
            v.y * u.z - v.z * u.y,
            v.z * u.x - v.x * u.z,
            v.x * u.y - v.y * u.x,
        )
    }

    /// Euclidean norm, computed without intermediate overflow.
    #[inline]
    pub fn norm(&self) -> f64 {
        scaled_norm(&<[f64; 3]>::from(*self))
    }

    /// Direction with norm 1; the zero vector maps to itself.
    #[inline]
    pub fn unit(&self) -> Self {
        let l = self.norm();
        if l == 0.0 {
            return Self::zero();
        }
        self.map(|e| e / l)
    }

    #[inline]
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|e| e * factor)
    }

    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (*self - *other).norm()
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(Vec3 { x, y, z }: Vec3) -> Self {
        [x, y, z]
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Vector {
        Vector::from(<[f64; 3]>::from(v))
    }
}

impl TryFrom<&Vector> for Vec3 {
    type Error = VectorError;

    fn try_from(v: &Vector) -> Result<Self, Self::Error> {
        v.check_dim(3)?;
        Ok(Vec3::new(v[0], v[1], v[2]))
    }
}

impl TryFrom<Vector> for Vec3 {
    type Error = VectorError;

    fn try_from(v: Vector) -> Result<Self, Self::Error> {
        Vec3::try_from(&v)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        self.map(|e| -e)
    }
}
