mod vector;
mod transform;

pub use vector::Vector2;
pub use transform::Transform;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Returns 1.0 for non-negative values and -1.0 otherwise.
///
/// Unlike `f64::signum`, a negative zero maps to 1.0, so a coincident axis
/// resolves toward the positive direction.
#[inline]
pub fn sign_or_positive(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
