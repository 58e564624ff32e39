//! Trigonometric helpers shared by the correction calculators.

/// Computes sine and cosine for an angle in degrees.
pub(crate) fn sin_cos_deg(angle_deg: f64) -> (f64, f64) {
    angle_deg.to_radians().sin_cos()
}

/// Clamps an inverse-trig argument into `[-1, 1]`.
///
/// The argument is mathematically inside the interval; rounding can push
/// it slightly past either end. NaN passes through.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}
