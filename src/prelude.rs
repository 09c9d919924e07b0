// src/prelude.rs
//! The "everything" import for vecmath.
//!
//! ```rust
//! use vecmath::prelude::*;
//! ```

// core data types
pub use crate::fixed::{Vec2, Vec3};
pub use crate::vector::{Rounded, Vector};

// errors
pub use crate::error::{Result, VectorError};
