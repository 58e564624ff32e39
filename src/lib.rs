//! Sightline is a celestial-navigation sight-reduction library.
//!
//! A sighting is a flat mapping of field names to string values. The
//! dispatcher routes it by its `op` field to one of the operations
//! (`adjust`, `correct`, `predict`, `locate`) and returns it with result
//! fields or a single `error` field added. Angles travel as sexagesimal
//! text such as `"45d15.2"`; see [`angle`].
//!
//! Batch dispatch can run on the rayon pool via the `rayon` feature, and
//! the `tracing` feature emits spans and events for every operation.
//!
//! ```
//! use serde_json::json;
//!
//! let output = sightline::dispatch(Some(json!({
//!     "op": "adjust",
//!     "observation": "42d0.0",
//!     "horizon": "artificial",
//! })));
//! assert_eq!(output.get_str("altitude"), Some("41d59.0"));
//! ```

pub mod almanac;
pub mod angle;
pub mod dispatch;
pub mod field;
pub mod ops;
pub mod reduce;
pub mod sighting;
mod trace;
pub mod util;

pub use almanac::{Almanac, BodyPosition, NoAlmanac, TableAlmanac};
pub use dispatch::{dispatch, DispatchConfig, Dispatcher};
pub use ops::{Adjust, Correct, CorrectErrorPolicy, Correction, Locate, Operation, Predict};
pub use reduce::{Atmosphere, Horizon};
pub use sighting::Sighting;
pub use util::{
    DispatchError, FieldError, InvalidReason, SexagesimalError, SightError, SightResult,
};
