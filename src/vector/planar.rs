//! 2D-only operations on [`Vector`].
//!
//! Each operation requires dimension exactly 2 and panics otherwise; the
//! `try_` forms report [`VectorError::WrongDimension`](crate::VectorError)
//! instead.

use super::{precondition, Vector};
use crate::error::Result;
use crate::math::PARALLEL_EPSILON;

impl Vector {
    /// The unit vector `(cos(angle), sin(angle))`.
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(vec![c, s])
    }

    /// Projection of `self` onto `u`: `unit(u) * (dot(self, u) / norm(u))`.
    ///
    /// # Panics
    /// If either vector is not 2D.
    #[track_caller]
    pub fn project_on(&self, u: &Self) -> Self {
        precondition(self.try_project_on(u))
    }

    pub fn try_project_on(&self, u: &Self) -> Result<Self> {
        self.check_dim(2)?;
        u.check_dim(2)?;
        Ok(u.unit().scale(self.try_dot(u)? / u.norm()))
    }

    /// Rotate counter-clockwise by `angle` radians.
    ///
    /// # Panics
    /// If `self` is not 2D.
    #[track_caller]
    pub fn rotate(&self, angle: f64) -> Self {
        precondition(self.try_rotate(angle))
    }

    pub fn try_rotate(&self, angle: f64) -> Result<Self> {
        self.check_dim(2)?;
        let (s, c) = angle.sin_cos();
        let (x, y) = (self[0], self[1]);
        Ok(Self::new(vec![x * c - y * s, x * s + y * c]))
    }

    /// `|v.x * u.y - v.y * u.x| < 1e-9`.
    ///
    /// # Panics
    /// If either vector is not 2D.
    #[track_caller]
    pub fn is_parallel_to(&self, u: &Self) -> bool {
        precondition(self.try_is_parallel_to(u))
    }

    pub fn try_is_parallel_to(&self, u: &Self) -> Result<bool> {
        self.check_dim(2)?;
        u.check_dim(2)?;
        Ok((self[0] * u[1] - self[1] * u[0]).abs() < PARALLEL_EPSILON)
    }
}
