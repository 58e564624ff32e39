//! `correct`: reduce a corrected altitude against an assumed position.

use super::Operation;
use crate::field::{Domain, FieldSpec};
use crate::reduce::{corrected_azimuth, corrected_distance};
use crate::sighting::Sighting;
use crate::trace::{trace_event, trace_reject, trace_span};
use crate::util::SightResult;
use serde::{Deserialize, Serialize};

/// Output field: distance to the line of position in nautical miles.
pub const CORRECTED_DISTANCE: &str = "correctedDistance";

/// Output field: azimuth of the body from the assumed position.
pub const CORRECTED_AZIMUTH: &str = "correctedAzimuth";

/// Geographic latitude of the body.
pub const LAT: FieldSpec<f64> = FieldSpec::angle("lat", Domain::open(-90.0, 90.0));

/// Geographic longitude of the body.
pub const LONG: FieldSpec<f64> = FieldSpec::angle("long", Domain::closed_open(0.0, 360.0));

/// Corrected altitude of the body.
pub const OBSERVED_ALTITUDE: FieldSpec<f64> =
    FieldSpec::angle("altitude", Domain::open(0.0, 90.0));

/// Assumed latitude of the observer.
pub const ASSUMED_LAT: FieldSpec<f64> = FieldSpec::angle("assumedLat", Domain::open(-90.0, 90.0));

/// Assumed longitude of the observer.
pub const ASSUMED_LONG: FieldSpec<f64> =
    FieldSpec::angle("assumedLong", Domain::closed_open(0.0, 360.0));

/// What `correct` does with a sighting that fails validation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectErrorPolicy {
    /// Return the input unchanged, without an `error` field.
    #[default]
    Discard,
    /// Add the extractor's `error` field like every other operation.
    Report,
}

/// Result of a successful reduction.
#[derive(Clone, Debug, PartialEq)]
pub struct Correction {
    /// Rounded distance in nautical miles; positive toward the body.
    pub distance: i64,
    /// Formatted azimuth from the assumed position.
    pub azimuth: String,
}

/// Handler for the `correct` operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Correct {
    policy: CorrectErrorPolicy,
}

impl Correct {
    /// Creates a handler with the given validation-failure policy.
    pub fn new(policy: CorrectErrorPolicy) -> Self {
        Self { policy }
    }

    /// Returns the validation-failure policy.
    pub fn policy(&self) -> CorrectErrorPolicy {
        self.policy
    }

    /// Validates the sighting and computes distance and azimuth.
    pub fn reduce(&self, sighting: &Sighting) -> SightResult<Correction> {
        let lat = LAT.extract(sighting)?;
        let long = LONG.extract(sighting)?;
        let altitude = OBSERVED_ALTITUDE.extract(sighting)?;
        let assumed_lat = ASSUMED_LAT.extract(sighting)?;
        let assumed_long = ASSUMED_LONG.extract(sighting)?;

        Ok(Correction {
            distance: corrected_distance(lat, assumed_lat, altitude, long, assumed_long),
            azimuth: corrected_azimuth(lat, assumed_lat, long, assumed_long),
        })
    }
}

impl Operation for Correct {
    fn name(&self) -> &'static str {
        "correct"
    }

    fn apply(&self, mut sighting: Sighting) -> Sighting {
        let _span = trace_span!("correct").entered();
        match self.reduce(&sighting) {
            Ok(correction) => {
                trace_event!(
                    "sight_reduced",
                    distance = correction.distance,
                    azimuth = correction.azimuth.as_str()
                );
                sighting.insert(CORRECTED_DISTANCE, correction.distance.to_string());
                sighting.insert(CORRECTED_AZIMUTH, correction.azimuth);
            }
            Err(error) => {
                let message = error.to_string();
                trace_reject!(self.name(), message.as_str());
                if self.policy == CorrectErrorPolicy::Report {
                    sighting.set_error(message);
                }
            }
        }
        sighting
    }
}
