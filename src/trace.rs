//! Feature-gated tracing macros.
//!
//! Spans cover one unit of work: `dispatch` (tagged with the op), each
//! handler (`adjust`, `correct`, `predict`, `locate`) and `dispatch_all`
//! (batch size and the parallel flag). Events report what a handler
//! produced (`altitude_adjusted`, `sight_reduced`, `body_predicted`) or
//! why it gave up (`sighting_rejected`). Without the `tracing` feature all
//! of this compiles away. Sightline never installs a subscriber.

/// Info-level span for a handler or a batch.
///
/// Handlers open it first thing in `apply`:
/// `let _span = trace_span!("correct").entered();`.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Info-level event carrying a handler's result fields.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

/// Debug-level `sighting_rejected` event with the op tag and the message
/// that went (or, under the discard policy, did not go) into `error`.
#[cfg(feature = "tracing")]
macro_rules! trace_reject {
    ($op:expr, $error:expr) => {
        tracing::debug!(name: "sighting_rejected", op = $op, error = $error)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_reject {
    ($op:expr, $error:expr) => {
        let _ = ($op, $error);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_reject;
pub(crate) use trace_span;

/// Stand-in for `tracing::Span` so handler code reads the same with the
/// feature off.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Returns the guard unchanged.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
