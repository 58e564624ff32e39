//! Operation handlers selected by a sighting's `op` field.
//!
//! Every handler consumes a sighting and returns it with either its result
//! fields or a single `error` field added. Input fields are never removed or
//! rewritten, and no handler writes a partial result.

mod adjust;
mod correct;
mod locate;
mod predict;

pub use adjust::{Adjust, ALTITUDE, HEIGHT, HORIZON, OBSERVATION, PRESSURE, TEMPERATURE};
pub use correct::{
    Correct, CorrectErrorPolicy, Correction, ASSUMED_LAT, ASSUMED_LONG, CORRECTED_AZIMUTH,
    CORRECTED_DISTANCE, LAT, LONG, OBSERVED_ALTITUDE,
};
pub use locate::Locate;
pub use predict::{Predict, BODY, DATE, TIME};

use crate::sighting::Sighting;

/// A handler for one operation tag.
pub trait Operation: Send + Sync {
    /// Tag matched against the sighting's `op` field.
    fn name(&self) -> &'static str;

    /// Runs the operation. Failures are reported inside the returned sighting.
    fn apply(&self, sighting: Sighting) -> Sighting;
}
