//! Canonical `"<degrees>d<minutes>"` rendering.

use super::{DELIMITER, MINUTES_PER_DEGREE};

/// Formats degrees as `"<degrees>d<minutes>"` with one decimal of minutes.
///
/// Minutes are rounded half away from zero; a rounded value of `60.0`
/// carries into the degree part. Negative angles get a leading `-`.
pub fn format(degrees: f64) -> String {
    let magnitude = degrees.abs();
    let mut whole = magnitude.trunc();
    let mut tenths = ((magnitude - whole) * MINUTES_PER_DEGREE * 10.0).round();
    if tenths >= MINUTES_PER_DEGREE * 10.0 {
        whole += 1.0;
        tenths -= MINUTES_PER_DEGREE * 10.0;
    }
    let sign = if degrees < 0.0 && (whole > 0.0 || tenths > 0.0) {
        "-"
    } else {
        ""
    };
    format!("{sign}{}{DELIMITER}{:.1}", whole as u64, tenths / 10.0)
}
