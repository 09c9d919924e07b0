//! Scalar helpers shared by the vector types.

/// Tolerance of the 2D parallelism test.
pub const PARALLEL_EPSILON: f64 = 1e-9;

/// Euclidean norm of `components`, scaled by the largest magnitude so the
/// squares neither overflow nor underflow for finite input.
pub fn scaled_norm(components: &[f64]) -> f64 {
    let max = components.iter().fold(0.0_f64, |m, e| {
        if m.is_nan() || e.is_nan() {
            f64::NAN
        } else {
            m.max(e.abs())
        }
    });
    if max == 0.0 || max.is_infinite() {
        return max;
    }
    let sum: f64 = components
        .iter()
        .map(|e| {
            let s = e / max;
            s * s
        })
        .sum();
    max * sum.sqrt()
}

/// Round `value` to `decimals` decimal places (half away from zero).
#[inline]
pub fn round(value: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (value * factor).round() / factor
}
