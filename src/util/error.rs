//! Error types for sightline.
//!
//! Failures are structured values; only the handler boundary renders them
//! into a sighting's `error` field, using the `Display` text defined here.

use thiserror::Error;

/// Result alias for sightline operations.
pub type Result<T> = std::result::Result<T, SightError>;

/// Reasons a `"<degrees>d<minutes>"` string is rejected by the codec.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SexagesimalError {
    /// The text does not contain exactly one `d` delimiter.
    #[error("expected exactly one 'd' delimiter, found {delimiters}")]
    MalformedFormat { delimiters: usize },
    /// A part is not a finite decimal number.
    #[error("'{part}' is not a finite number")]
    InvalidNumber { part: String },
    /// The degree part carries a minus sign.
    #[error("degree part is negative")]
    NegativeWhole,
    /// The degree part is not written as an integer.
    #[error("degree part is not an integer")]
    NonIntegerWhole,
    /// The minutes part is below zero.
    #[error("negative number of minutes")]
    NegativeMinutes,
    /// The minutes part is 60 or more.
    #[error("number of minutes too large")]
    MinutesOutOfRange,
    /// The combined measurement is not above 0 degrees.
    #[error("measurement too small")]
    TooSmall,
    /// The combined measurement is not below 90 degrees.
    #[error("measurement too large")]
    TooLarge,
}

/// Why a present field value failed validation.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum InvalidReason {
    #[error("value is not a string")]
    NotText,
    #[error(transparent)]
    Sexagesimal(#[from] SexagesimalError),
    #[error("value is not a number")]
    NotANumber,
    #[error("value is not an integer")]
    NotAnInteger,
    #[error("value is not one of the accepted choices")]
    UnknownChoice,
    #[error("value is outside the field's domain")]
    OutOfDomain,
}

/// Extraction failure for a single named field.
///
/// The rendered message never includes `reason`; it is kept for diagnostics.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("missing mandatory field {name}")]
    MissingMandatory { name: &'static str },
    #[error("mandatory information is missing")]
    MissingInformation { name: &'static str },
    #[error("{name} is invalid")]
    Invalid {
        name: &'static str,
        reason: InvalidReason,
    },
    #[error("{name} cannot be given in input")]
    Unexpected { name: &'static str },
}

impl FieldError {
    /// Returns the name of the field that failed.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::MissingMandatory { name }
            | FieldError::MissingInformation { name }
            | FieldError::Invalid { name, .. }
            | FieldError::Unexpected { name } => name,
        }
    }
}

/// Failures detected by the dispatcher before any handler runs.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("parameter is missing")]
    MissingParameter,
    #[error("parameter is not a dictionary")]
    NotAMapping,
    #[error("no op is specified")]
    MissingOp,
    #[error("op is not a legal operation")]
    UnknownOp,
}

/// Any failure that ends up in a sighting's `error` field.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SightError {
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}
