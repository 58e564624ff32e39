//! Sexagesimal degree codec.
//!
//! Angles cross the sighting boundary as `"<degrees>d<minutes>"` strings,
//! e.g. `"45d30.0"` for 45.5 degrees. The degree part is an integer and the
//! minutes part is a decimal in `[0, 60)`. Formatting always renders one
//! decimal digit of minutes, so a parse/format round trip is exact to a
//! tenth of an arcminute.

mod format;
mod parse;

pub use format::format;
pub use parse::{parse, parse_signed};

/// Arcminutes per degree.
pub const MINUTES_PER_DEGREE: f64 = 60.0;

/// Separator between the degree and minutes parts.
pub const DELIMITER: char = 'd';
