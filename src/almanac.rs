//! Almanac lookups used by the `predict` operation.
//!
//! Sightline does not model time or ephemerides itself. An [`Almanac`]
//! answers "where is this body at this date and time" from whatever data
//! the host provides; the default [`NoAlmanac`] knows nothing, which turns
//! `predict` into a pass-through.

use std::collections::HashMap;

/// Geographic position of a body's sub-point, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyPosition {
    /// Latitude (declination) in degrees, north positive.
    pub lat: f64,
    /// Longitude (hour angle) in degrees.
    pub long: f64,
}

/// Source of body positions keyed by body name, date and time.
pub trait Almanac: Send + Sync {
    /// Returns the body's position, or `None` if the almanac has no entry.
    fn position(&self, body: &str, date: &str, time: &str) -> Option<BodyPosition>;
}

/// Almanac with no entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAlmanac;

impl Almanac for NoAlmanac {
    fn position(&self, _body: &str, _date: &str, _time: &str) -> Option<BodyPosition> {
        None
    }
}

/// In-memory almanac of tabulated positions.
///
/// Body names match case-insensitively; date and time must match exactly.
#[derive(Clone, Debug, Default)]
pub struct TableAlmanac {
    entries: HashMap<(String, String, String), BodyPosition>,
}

impl TableAlmanac {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the position of `body` at `date` and `time`.
    pub fn insert(&mut self, body: &str, date: &str, time: &str, position: BodyPosition) {
        self.entries.insert(key(body, date, time), position);
    }

    /// Builder-style [`TableAlmanac::insert`].
    pub fn with_entry(
        mut self,
        body: &str,
        date: &str,
        time: &str,
        position: BodyPosition,
    ) -> Self {
        self.insert(body, date, time, position);
        self
    }

    /// Returns the number of tabulated positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Almanac for TableAlmanac {
    fn position(&self, body: &str, date: &str, time: &str) -> Option<BodyPosition> {
        self.entries.get(&key(body, date, time)).copied()
    }
}

fn key(body: &str, date: &str, time: &str) -> (String, String, String) {
    (body.to_ascii_lowercase(), date.to_string(), time.to_string())
}
