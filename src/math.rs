//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector2;

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for two-dimensional real vectors.
pub type V2 = Vector2<Scalar>;

/// Returns the unit free-stream velocity at angle of attack `alpha` (radians).
#[must_use]
pub fn free_stream(alpha: Scalar) -> V2 {
    V2::new(alpha.cos(), alpha.sin())
}

/// Generates `n` linearly spaced samples in [start, stop].
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}
