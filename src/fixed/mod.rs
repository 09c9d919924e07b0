//! Fixed-size 2D and 3D vectors.
//!
//! These carry their dimension in the type, so the 2D-only and 3D-only
//! operations need no runtime checks. Convert to and from [`Vector`] with
//! `From` / `TryFrom`.
//!
//! [`Vector`]: crate::Vector

pub mod vec2;
pub mod vec3;

pub use vec2::Vec2;
pub use vec3::Vec3;
