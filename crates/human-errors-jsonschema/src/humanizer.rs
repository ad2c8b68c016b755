//! Compiled schema paired with formatting options
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::convert::to_raw_errors;
use crate::error::{Error, Result};
use human_errors::{AggregateError, FormatOptions, RawValidationError};
use jsonschema::Validator;
use serde_json::Value;
use tracing::debug;

/// Validates documents against one schema and explains the failures
pub struct SchemaHumanizer {
    schema: Value,
    validator: Validator,
    options: FormatOptions,
}

impl std::fmt::Debug for SchemaHumanizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaHumanizer")
            .field("schema", &self.schema)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl SchemaHumanizer {
    /// Compile `schema` for validation
    ///
    /// `format` is always asserted, whatever the draft says, so format
    /// failures surface the way they do under AJV.
    pub fn new(schema: &Value, options: FormatOptions) -> Result<Self> {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| Error::InvalidSchema { reason: e.to_string() })?;

        debug!(options = ?options, "compiled schema for humanized validation");

        Ok(Self {
            schema: schema.clone(),
            validator,
            options,
        })
    }

    /// Compile `schema`, reading options from a JSON document
    pub fn with_options_value(schema: &Value, options: &Value) -> Result<Self> {
        let options = FormatOptions::from_value(options)?;
        Self::new(schema, options)
    }

    /// The options used for every formatting call
    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// The schema this humanizer validates against
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Validate `instance` and return the failures as AJV-shaped records
    pub fn raw_errors(&self, instance: &Value) -> Vec<RawValidationError> {
        let raw: Vec<RawValidationError> = self
            .validator
            .iter_errors(instance)
            .flat_map(|error| to_raw_errors(&self.schema, &error))
            .collect();

        debug!(errors = raw.len(), "validation finished");
        raw
    }

    /// Validate `instance` and format every failure
    pub fn humanize(&self, instance: &Value) -> AggregateError {
        AggregateError::new(&self.raw_errors(instance), &self.options)
    }

    /// `Ok` when `instance` is valid, otherwise the formatted failures
    pub fn validate(&self, instance: &Value) -> std::result::Result<(), AggregateError> {
        self.humanize(instance).into_result()
    }
}

/// One-shot helper: compile `schema`, validate `instance`, format failures
pub fn humanize_errors(
    schema: &Value,
    instance: &Value,
    options: FormatOptions,
) -> Result<AggregateError> {
    Ok(SchemaHumanizer::new(schema, options)?.humanize(instance))
}
