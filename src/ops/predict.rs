//! `predict`: fill in a body's geographic position from an almanac.

use super::correct::{LAT, LONG};
use super::Operation;
use crate::almanac::{Almanac, NoAlmanac};
use crate::angle;
use crate::sighting::Sighting;
use crate::trace::{trace_event, trace_span};
use std::fmt;
use std::sync::Arc;

/// Name of the celestial body.
pub const BODY: &str = "body";

/// Observation date, passed to the almanac verbatim.
pub const DATE: &str = "date";

/// Observation time, passed to the almanac verbatim.
pub const TIME: &str = "time";

/// Handler for the `predict` operation.
///
/// Writes `lat` and `long` when the almanac knows the sighting's `body` at
/// its `date` and `time`; fields already present are left alone. Otherwise
/// the sighting passes through unchanged.
#[derive(Clone)]
pub struct Predict {
    almanac: Arc<dyn Almanac>,
}

impl Predict {
    /// Creates a handler backed by `almanac`.
    pub fn new(almanac: Arc<dyn Almanac>) -> Self {
        Self { almanac }
    }
}

impl Default for Predict {
    fn default() -> Self {
        Self::new(Arc::new(NoAlmanac))
    }
}

impl fmt::Debug for Predict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predict").finish_non_exhaustive()
    }
}

impl Operation for Predict {
    fn name(&self) -> &'static str {
        "predict"
    }

    fn apply(&self, mut sighting: Sighting) -> Sighting {
        let _span = trace_span!("predict").entered();
        let position = match (
            sighting.get_str(BODY),
            sighting.get_str(DATE),
            sighting.get_str(TIME),
        ) {
            (Some(body), Some(date), Some(time)) => self.almanac.position(body, date, time),
            _ => None,
        };
        let Some(position) = position else {
            return sighting;
        };

        trace_event!("body_predicted", lat = position.lat, long = position.long);
        if !sighting.contains(LAT.name) {
            sighting.insert(LAT.name, angle::format(position.lat));
        }
        if !sighting.contains(LONG.name) {
            sighting.insert(LONG.name, angle::format(position.long));
        }
        sighting
    }
}
