//! Bounds-checked extraction of named fields from a sighting.
//!
//! Every field a handler reads is described by a [`FieldSpec`]: its name,
//! what happens when it is absent, how its text is parsed, and the
//! [`Domain`] the parsed value must fall in. Extraction stops at the first
//! violation and reports it as a [`FieldError`]; the sighting itself is
//! never modified here.

mod domain;

pub use domain::Domain;

use crate::angle;
use crate::sighting::Sighting;
use crate::util::{FieldError, InvalidReason};
use std::fmt;

/// Behavior of a field that is absent from the sighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Presence<T> {
    /// Absence fails with `"missing mandatory field <name>"`.
    Required,
    /// Absence fails with `"mandatory information is missing"`.
    RequiredUnnamed,
    /// Absence yields this value.
    Default(T),
}

/// Descriptor of one extractable field.
#[derive(Clone, Copy)]
pub struct FieldSpec<T: 'static> {
    pub name: &'static str,
    pub presence: Presence<T>,
    pub parse: fn(&str) -> Result<T, InvalidReason>,
    pub domain: Option<Domain<T>>,
}

impl<T: fmt::Debug> fmt::Debug for FieldSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("presence", &self.presence)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl FieldSpec<f64> {
    /// Mandatory signed angle field bounded by `domain`.
    pub const fn angle(name: &'static str, domain: Domain<f64>) -> Self {
        Self {
            name,
            presence: Presence::Required,
            parse: signed_angle,
            domain: Some(domain),
        }
    }
}

impl<T: Copy + PartialOrd> FieldSpec<T> {
    /// Reads, parses and range-checks the field.
    pub fn extract(&self, sighting: &Sighting) -> Result<T, FieldError> {
        let Some(value) = sighting.get(self.name) else {
            return match self.presence {
                Presence::Default(default) => Ok(default),
                Presence::Required => Err(FieldError::MissingMandatory { name: self.name }),
                Presence::RequiredUnnamed => {
                    Err(FieldError::MissingInformation { name: self.name })
                }
            };
        };
        let text = value
            .as_str()
            .ok_or_else(|| self.invalid(InvalidReason::NotText))?;
        let parsed = (self.parse)(text).map_err(|reason| self.invalid(reason))?;
        match &self.domain {
            Some(domain) if !domain.contains(&parsed) => {
                Err(self.invalid(InvalidReason::OutOfDomain))
            }
            _ => Ok(parsed),
        }
    }

    fn invalid(&self, reason: InvalidReason) -> FieldError {
        FieldError::Invalid {
            name: self.name,
            reason,
        }
    }
}

/// Fails if an output-only field was supplied by the caller.
pub fn forbid(sighting: &Sighting, name: &'static str) -> Result<(), FieldError> {
    if sighting.contains(name) {
        return Err(FieldError::Unexpected { name });
    }
    Ok(())
}

/// Strict sextant measurement in `(0, 90)`.
pub fn measurement(text: &str) -> Result<f64, InvalidReason> {
    angle::parse(text).map_err(InvalidReason::from)
}

/// Signed angle, bounded only by the field's domain.
pub fn signed_angle(text: &str) -> Result<f64, InvalidReason> {
    angle::parse_signed(text).map_err(InvalidReason::from)
}

/// Finite decimal number.
pub fn decimal(text: &str) -> Result<f64, InvalidReason> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidReason::NotANumber),
    }
}

/// Integer written without a fractional part.
pub fn integer(text: &str) -> Result<i64, InvalidReason> {
    text.parse::<i64>().map_err(|_| InvalidReason::NotAnInteger)
}
