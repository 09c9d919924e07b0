//! # vecmath Quickstart
//!
//! ```rust
//! use vecmath::prelude::*;
//!
//! // Rotate (1,0) a quarter turn counter-clockwise
//! let v = Vector::from([1.0, 0.0]);
//! let r = v.rotate(std::f64::consts::FRAC_PI_2);
//!
//! // Should end up at (0,1)
//! const EPS: f64 = 1e-12;
//! assert!(r.approx_eq(&Vector::from([0.0, 1.0]), EPS));
//!
//! // 3D cross product
//! let c = Vector::from([2.0, 3.0, 4.0]).cross(&Vector::from([5.0, 6.0, 7.0]));
//! assert_eq!(c, Vector::from([-3.0, 6.0, -3.0]));
//!
//! // Dimension mismatches are errors on the checked API
//! assert!(Vector::zero(2).try_dot(&Vector::zero(3)).is_err());
//! ```

pub mod error;
pub mod fixed;
pub mod math;
pub mod prelude;
pub mod vector;

// --- Public API exports ---

pub use error::{Result, VectorError};
pub use fixed::{Vec2, Vec3};
pub use math::round;
pub use vector::{Rounded, Vector};
