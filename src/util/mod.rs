//! Shared utility helpers.

pub mod error;
pub(crate) mod math;

pub use error::{
    DispatchError, FieldError, InvalidReason, Result as SightResult, SexagesimalError, SightError,
};
