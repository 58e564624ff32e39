//! Observed-altitude correction for dip and atmospheric refraction.
//!
//! The coefficients follow the usual nautical-almanac approximations: dip
//! of `0.97'·√height` (height in feet) and a refraction term scaled by
//! pressure (millibars) over absolute temperature.

use crate::util::InvalidReason;
use std::str::FromStr;

/// Dip in arcminutes per square root of eye height in feet.
const DIP_ARCMIN_PER_SQRT_FT: f64 = -0.97;

/// Refraction scale in degrees·kelvin per millibar.
const REFRACTION_COEFFICIENT: f64 = -0.00452;

/// Offset from degrees Celsius to kelvin used by the refraction tables.
const CELSIUS_TO_KELVIN: f64 = 273.0;

/// Standard temperature in degrees Fahrenheit.
pub const STANDARD_TEMPERATURE_F: i64 = 72;

/// Standard pressure in millibars.
pub const STANDARD_PRESSURE_MBAR: i64 = 1010;

/// Horizon the sextant altitude was measured against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Horizon {
    /// Sea horizon; the observer's eye height causes dip.
    #[default]
    Natural,
    /// Artificial (bubble or mirror) horizon; no dip.
    Artificial,
}

impl Horizon {
    /// Returns true for a sea horizon.
    pub fn is_natural(self) -> bool {
        self == Horizon::Natural
    }
}

impl FromStr for Horizon {
    type Err = InvalidReason;

    /// Parses `"natural"` or `"artificial"`, ignoring ASCII case.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("natural") {
            Ok(Horizon::Natural)
        } else if text.eq_ignore_ascii_case("artificial") {
            Ok(Horizon::Artificial)
        } else {
            Err(InvalidReason::UnknownChoice)
        }
    }
}

/// Air conditions at the time of the sight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Atmosphere {
    /// Temperature in degrees Fahrenheit.
    pub temperature_f: i64,
    /// Barometric pressure in millibars.
    pub pressure_mbar: i64,
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self {
            temperature_f: STANDARD_TEMPERATURE_F,
            pressure_mbar: STANDARD_PRESSURE_MBAR,
        }
    }
}

impl Atmosphere {
    /// Temperature in degrees Celsius.
    pub fn temperature_c(&self) -> f64 {
        (self.temperature_f as f64 - 32.0) * 5.0 / 9.0
    }
}

/// Dip correction in degrees (non-positive).
pub fn dip(height_ft: f64, horizon: Horizon) -> f64 {
    match horizon {
        Horizon::Natural => DIP_ARCMIN_PER_SQRT_FT * height_ft.sqrt() / 60.0,
        Horizon::Artificial => 0.0,
    }
}

/// Refraction correction in degrees (non-positive) for an altitude in `(0, 90)`.
pub fn refraction(observed_deg: f64, atmosphere: Atmosphere) -> f64 {
    let absolute_temperature = CELSIUS_TO_KELVIN + atmosphere.temperature_c();
    REFRACTION_COEFFICIENT * atmosphere.pressure_mbar as f64
        / absolute_temperature
        / observed_deg.to_radians().tan()
}

/// Corrected altitude in degrees.
pub fn altitude_adjustment(
    observed_deg: f64,
    height_ft: f64,
    atmosphere: Atmosphere,
    horizon: Horizon,
) -> f64 {
    observed_deg + dip(height_ft, horizon) + refraction(observed_deg, atmosphere)
}

#[cfg(test)]
mod tests {
    use super::{altitude_adjustment, dip, refraction, Atmosphere, Horizon};
    use crate::angle::format;
    use crate::util::InvalidReason;

    #[test]
    fn horizon_parses_case_insensitively() {
        assert_eq!("natural".parse::<Horizon>(), Ok(Horizon::Natural));
        assert_eq!("NaTuRaL".parse::<Horizon>(), Ok(Horizon::Natural));
        assert_eq!("ARTIFICIAL".parse::<Horizon>(), Ok(Horizon::Artificial));
        assert_eq!("natur".parse::<Horizon>(), Err(InvalidReason::UnknownChoice));
        assert_eq!(" natural".parse::<Horizon>(), Err(InvalidReason::UnknownChoice));
        assert!(Horizon::default().is_natural());
    }

    #[test]
    fn dip_applies_only_to_natural_horizon() {
        assert_eq!(dip(19.0, Horizon::Artificial), 0.0);
        assert_eq!(dip(0.0, Horizon::Natural), 0.0);
        let six_feet = dip(6.0, Horizon::Natural);
        assert!((six_feet + 0.0396).abs() < 1e-4, "got {six_feet}");
    }

    #[test]
    fn refraction_shrinks_with_altitude() {
        let atmosphere = Atmosphere::default();
        let low = refraction(10.0, atmosphere);
        let high = refraction(60.0, atmosphere);
        assert!(low < high && high < 0.0);
    }

    #[test]
    fn standard_atmosphere_is_72f_1010mbar() {
        let atmosphere = Atmosphere::default();
        assert_eq!(atmosphere.temperature_f, 72);
        assert_eq!(atmosphere.pressure_mbar, 1010);
        assert!((atmosphere.temperature_c() - 22.2222).abs() < 1e-3);
    }

    #[test]
    fn adjustment_reproduces_nominal_cases() {
        let cases = [
            (30.025, 19.0, 85, 1000, Horizon::Artificial, 29.998333),
            (45.25333, 6.0, 71, 1010, Horizon::Natural, 45.198333),
            (42.0, 0.0, 72, 1010, Horizon::Artificial, 41.983333),
        ];
        for (observed, height, temperature_f, pressure_mbar, horizon, expected) in cases {
            let atmosphere = Atmosphere {
                temperature_f,
                pressure_mbar,
            };
            let actual = altitude_adjustment(observed, height, atmosphere, horizon);
            assert_eq!(format(actual), format(expected), "observed {observed}");
        }
    }
}
