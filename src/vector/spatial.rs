// 3D-only operations on Vector.

use super::{precondition, Vector};
use crate::error::Result;

impl Vector {
    /// Cross product of two 3-vectors.
    ///
    /// # Panics
    /// If either vector is not 3D.
    #[track_caller]
    pub fn cross(&self, u: &Self) -> Self {
        precondition(self.try_cross(u))
    }

    pub fn try_cross(&self, u: &Self) -> Result<Self> {
        self.check_dim(3)?;
        u.check_dim(3)?;
        let v = self;
        Ok(Self::new(vec![
            v[1] * u[2] - v[2] * u[1],
            v[2] * u[0] - v[0] * u[2],
            v[0] * u[1] - v[1] * u[0],
        ]))
    }
}
