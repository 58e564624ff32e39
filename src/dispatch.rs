//! Routing of sightings to operation handlers.
//!
//! A [`Dispatcher`] owns an immutable table from operation tag to handler,
//! built once and shared freely between threads. It checks the shape of the
//! raw input, looks up the `op` field and hands the sighting to the matching
//! [`Operation`]. Every outcome, including a malformed input, is a returned
//! [`Sighting`].

use crate::almanac::Almanac;
use crate::ops::{Adjust, Correct, CorrectErrorPolicy, Locate, Operation, Predict};
use crate::sighting::{Sighting, OP_FIELD};
use crate::trace::trace_span;
use crate::util::DispatchError;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// Dispatcher configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Handling of `correct` sightings that fail validation.
    pub correct_errors: CorrectErrorPolicy,
    /// Run [`Dispatcher::dispatch_all`] on the rayon pool. Ignored unless
    /// the `rayon` feature is enabled.
    pub parallel: bool,
}

/// Table of operation handlers keyed by tag.
pub struct Dispatcher {
    config: DispatchConfig,
    operations: BTreeMap<&'static str, Box<dyn Operation>>,
}

impl Dispatcher {
    /// Creates a dispatcher with the built-in operations and default config.
    pub fn new() -> Self {
        let mut dispatcher = Self {
            config: DispatchConfig::default(),
            operations: BTreeMap::new(),
        };
        dispatcher.register(Adjust);
        dispatcher.register(Correct::default());
        dispatcher.register(Locate);
        dispatcher.register(Predict::default());
        dispatcher
    }

    /// Applies `config`, rebuilding the handlers it affects.
    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self.register(Correct::new(config.correct_errors));
        self
    }

    /// Backs the `predict` operation with `almanac`.
    pub fn with_almanac(self, almanac: Arc<dyn Almanac>) -> Self {
        self.with_operation(Predict::new(almanac))
    }

    /// Adds a handler, replacing any handler with the same tag.
    pub fn with_operation(mut self, operation: impl Operation + 'static) -> Self {
        self.register(operation);
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Iterates over the registered operation tags in sorted order.
    pub fn operations(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }

    /// Routes a raw input. `None` stands for a call without a parameter.
    pub fn dispatch(&self, input: Option<Value>) -> Sighting {
        let Some(input) = input else {
            return Sighting::from_error(DispatchError::MissingParameter);
        };
        let Value::Object(fields) = input else {
            return Sighting::from_error(DispatchError::NotAMapping);
        };
        self.dispatch_sighting(Sighting::from(fields))
    }

    /// Routes a sighting by its `op` field.
    pub fn dispatch_sighting(&self, mut sighting: Sighting) -> Sighting {
        let operation = match sighting.get(OP_FIELD) {
            None => Err(DispatchError::MissingOp),
            Some(op) => op
                .as_str()
                .and_then(|tag| self.operations.get(tag))
                .ok_or(DispatchError::UnknownOp),
        };
        match operation {
            Ok(operation) => {
                let _span = trace_span!("dispatch", op = operation.name()).entered();
                operation.apply(sighting)
            }
            Err(error) => {
                sighting.set_error(error);
                sighting
            }
        }
    }

    /// Routes a batch of independent inputs, preserving order.
    pub fn dispatch_all(&self, inputs: Vec<Value>) -> Vec<Sighting> {
        let _span = trace_span!(
            "dispatch_all",
            count = inputs.len(),
            parallel = self.config.parallel
        )
        .entered();

        #[cfg(feature = "rayon")]
        {
            if self.config.parallel {
                return inputs
                    .into_par_iter()
                    .map(|input| self.dispatch(Some(input)))
                    .collect();
            }
        }

        inputs
            .into_iter()
            .map(|input| self.dispatch(Some(input)))
            .collect()
    }

    fn register(&mut self, operation: impl Operation + 'static) {
        self.operations.insert(operation.name(), Box::new(operation));
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("operations", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}

static DEFAULT_DISPATCHER: LazyLock<Dispatcher> = LazyLock::new(Dispatcher::new);

/// Routes `input` through the process-wide default dispatcher.
pub fn dispatch(input: Option<Value>) -> Sighting {
    DEFAULT_DISPATCHER.dispatch(input)
}
