//! `locate`: accepted, returns the sighting unchanged.

use super::Operation;
use crate::sighting::Sighting;
use crate::trace::trace_span;

/// Handler for the `locate` operation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Locate;

impl Operation for Locate {
    fn name(&self) -> &'static str {
        "locate"
    }

    fn apply(&self, sighting: Sighting) -> Sighting {
        let _span = trace_span!("locate").entered();
        sighting
    }
}
