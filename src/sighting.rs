//! The sighting mapping passed through every operation.
//!
//! A `Sighting` is an ordered map from field name to JSON value. Inputs are
//! untyped at this boundary; the field extractors enforce types and ranges
//! when a handler reads a field. Handlers only ever add fields: either the
//! single [`ERROR_FIELD`] or their result fields, never both.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Name of the field that carries a failure message.
pub const ERROR_FIELD: &str = "error";

/// Name of the field that selects the operation.
pub const OP_FIELD: &str = "op";

/// Mapping of named fields describing one observation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sighting {
    fields: Map<String, Value>,
}

impl Sighting {
    /// Creates an empty sighting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sighting holding only an error message.
    pub fn from_error(error: impl fmt::Display) -> Self {
        let mut sighting = Self::new();
        sighting.set_error(error);
        sighting
    }

    /// Returns the raw value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the value of `name` if it is present and a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Returns true if `name` is present, whatever its value.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Inserts or replaces a field.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the error message, if the sighting carries one.
    pub fn error(&self) -> Option<&str> {
        self.get_str(ERROR_FIELD)
    }

    /// Returns true if the sighting carries an error field.
    pub fn has_error(&self) -> bool {
        self.contains(ERROR_FIELD)
    }

    /// Records `error` as the sighting's error message.
    pub fn set_error(&mut self, error: impl fmt::Display) {
        self.insert(ERROR_FIELD, error.to_string());
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the sighting has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the underlying JSON map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for Sighting {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl From<Sighting> for Value {
    fn from(sighting: Sighting) -> Self {
        Value::Object(sighting.into_inner())
    }
}

impl<K, V> FromIterator<(K, V)> for Sighting
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
