//! Errors returned by the checked (`try_*`) vector operations.

use derive_more::{Display, Error, IsVariant};

/// All errors returned by `vecmath`.
///
/// The panicking operations on [`Vector`](crate::Vector) use the same
/// values as their panic messages.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum VectorError {
    /// Two operands of a binary operation have different dimensions.
    #[display("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A 2D- or 3D-only operation was called on a vector of another size.
    #[display("operation requires a {required}D vector, got {got} components")]
    WrongDimension { required: usize, got: usize },
}

/// Convenience alias used throughout `vecmath`.
pub type Result<T> = std::result::Result<T, VectorError>;
