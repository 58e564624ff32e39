//! Correction calculators for sight reduction.
//!
//! These are pure functions of validated angles in degrees: no sighting
//! access and no failure paths. [`altitude`] adjusts an observed altitude
//! for dip and refraction; the functions here compare a sight against an
//! assumed position using the spherical cosine rule.

pub mod altitude;

pub use altitude::{altitude_adjustment, Atmosphere, Horizon};

use crate::angle;
use crate::util::math::{clamp_unit, sin_cos_deg};

/// Distance from `|intermediate| == 1` below which the body is overhead.
const ZENITH_TOLERANCE: f64 = 1e-12;

/// Cosine-rule term shared by the distance and azimuth calculations.
///
/// Returns `sin(lat)·sin(assumed_lat) + cos(lat)·cos(assumed_lat)·cos(long + assumed_long)`,
/// the sine of the altitude the body would have from the assumed position.
pub fn intermediate_distance(lat: f64, assumed_lat: f64, long: f64, assumed_long: f64) -> f64 {
    let (sin_lat, cos_lat) = sin_cos_deg(lat);
    let (sin_assumed, cos_assumed) = sin_cos_deg(assumed_lat);
    let cos_lha = (long + assumed_long).to_radians().cos();
    sin_lat * sin_assumed + cos_lat * cos_assumed * cos_lha
}

/// Distance in arcminutes (nautical miles) between the observed altitude
/// and the altitude computed for the assumed position, rounded to the
/// nearest integer.
pub fn corrected_distance(
    lat: f64,
    assumed_lat: f64,
    altitude: f64,
    long: f64,
    assumed_long: f64,
) -> i64 {
    let intermediate = intermediate_distance(lat, assumed_lat, long, assumed_long);
    let computed_altitude = clamp_unit(intermediate).asin();
    let distance_deg = (altitude.to_radians() - computed_altitude).to_degrees();
    (distance_deg * angle::MINUTES_PER_DEGREE).round() as i64
}

/// Azimuth in degrees `[0, 180]` of the body from the assumed position.
///
/// Equal to `acos((sin(lat) - sin(assumed_lat)·I) / (cos(assumed_lat)·cos(asin(I))))`
/// with `I` the [`intermediate_distance`], evaluated as an `atan2` of the
/// east-west and north-south components so it stays accurate when the
/// assumed position is a fraction of an arcminute from the body. When the
/// assumed position is the body's geographic position the azimuth is
/// undefined and `0.0` is returned.
pub fn corrected_azimuth_deg(lat: f64, assumed_lat: f64, long: f64, assumed_long: f64) -> f64 {
    let intermediate = intermediate_distance(lat, assumed_lat, long, assumed_long);
    if 1.0 - intermediate.abs() < ZENITH_TOLERANCE {
        return 0.0;
    }
    let (sin_lat, cos_lat) = sin_cos_deg(lat);
    let (sin_assumed, cos_assumed) = sin_cos_deg(assumed_lat);
    let (sin_lha, cos_lha) = sin_cos_deg(long + assumed_long);
    let east_west = (cos_lat * sin_lha).abs();
    let north_south = cos_assumed * sin_lat - sin_assumed * cos_lat * cos_lha;
    east_west.atan2(north_south).to_degrees()
}

/// Azimuth from the assumed position, formatted as `"<degrees>d<minutes>"`.
pub fn corrected_azimuth(lat: f64, assumed_lat: f64, long: f64, assumed_long: f64) -> String {
    angle::format(corrected_azimuth_deg(lat, assumed_lat, long, assumed_long))
}
