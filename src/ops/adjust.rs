//! `adjust`: correct a sextant observation for dip and refraction.

use super::Operation;
use crate::angle;
use crate::field::{self, Domain, FieldSpec, Presence};
use crate::reduce::altitude::{STANDARD_PRESSURE_MBAR, STANDARD_TEMPERATURE_F};
use crate::reduce::{altitude_adjustment, Atmosphere, Horizon};
use crate::sighting::Sighting;
use crate::trace::{trace_event, trace_reject, trace_span};
use crate::util::SightResult;
use std::str::FromStr;

/// Output field holding the corrected altitude. Callers may not supply it.
pub const ALTITUDE: &str = "altitude";

/// Sextant altitude, `(0, 90)` degrees.
pub const OBSERVATION: FieldSpec<f64> = FieldSpec {
    name: "observation",
    presence: Presence::RequiredUnnamed,
    parse: field::measurement,
    domain: Some(Domain::open(0.0, 90.0)),
};

/// Eye height above the horizon in feet.
pub const HEIGHT: FieldSpec<f64> = FieldSpec {
    name: "height",
    presence: Presence::Default(0.0),
    parse: field::decimal,
    domain: Some(Domain::at_least(0.0)),
};

/// Air temperature in degrees Fahrenheit.
pub const TEMPERATURE: FieldSpec<i64> = FieldSpec {
    name: "temperature",
    presence: Presence::Default(STANDARD_TEMPERATURE_F),
    parse: field::integer,
    domain: Some(Domain::closed(-20, 120)),
};

/// Barometric pressure in millibars.
pub const PRESSURE: FieldSpec<i64> = FieldSpec {
    name: "pressure",
    presence: Presence::Default(STANDARD_PRESSURE_MBAR),
    parse: field::integer,
    domain: Some(Domain::closed(100, 1100)),
};

/// `"natural"` or `"artificial"`, any case.
pub const HORIZON: FieldSpec<Horizon> = FieldSpec {
    name: "horizon",
    presence: Presence::Default(Horizon::Natural),
    parse: Horizon::from_str,
    domain: None,
};

/// Handler for the `adjust` operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adjust;

impl Adjust {
    /// Validates the sighting and returns the corrected altitude in degrees.
    pub fn reduce(&self, sighting: &Sighting) -> SightResult<f64> {
        field::forbid(sighting, ALTITUDE)?;
        let observation = OBSERVATION.extract(sighting)?;
        let height = HEIGHT.extract(sighting)?;
        let temperature_f = TEMPERATURE.extract(sighting)?;
        let pressure_mbar = PRESSURE.extract(sighting)?;
        let horizon = HORIZON.extract(sighting)?;

        let atmosphere = Atmosphere {
            temperature_f,
            pressure_mbar,
        };
        Ok(altitude_adjustment(observation, height, atmosphere, horizon))
    }
}

impl Operation for Adjust {
    fn name(&self) -> &'static str {
        "adjust"
    }

    fn apply(&self, mut sighting: Sighting) -> Sighting {
        let _span = trace_span!("adjust").entered();
        match self.reduce(&sighting) {
            Ok(altitude) => {
                let altitude = angle::format(altitude);
                trace_event!("altitude_adjusted", altitude = altitude.as_str());
                sighting.insert(ALTITUDE, altitude);
            }
            Err(error) => {
                let message = error.to_string();
                trace_reject!(self.name(), message.as_str());
                sighting.set_error(message);
            }
        }
        sighting
    }
}
