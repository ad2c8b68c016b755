//! Aggregated validation errors
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::formatter::{humanize, FormattedError};
use crate::options::FormatOptions;
use crate::raw::RawValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::slice;

/// Every non-redundant error from one validation run, in validator order
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateError {
    errors: Vec<FormattedError>,
    message: String,
}

impl AggregateError {
    /// Format each raw error with the same options, dropping redundant ones
    pub fn new<'a, I>(raw_errors: I, options: &FormatOptions) -> Self
    where
        I: IntoIterator<Item = &'a RawValidationError>,
    {
        let errors: Vec<FormattedError> = raw_errors
            .into_iter()
            .filter_map(|raw| humanize(raw, options).into_formatted())
            .collect();

        let message = errors
            .iter()
            .map(|err| err.message.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self { errors, message }
    }

    /// All messages joined by a single space
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterate over the retained errors; can be called any number of times
    pub fn iter(&self) -> slice::Iter<'_, FormattedError> {
        self.errors.iter()
    }

    /// The retained errors
    pub fn errors(&self) -> &[FormattedError] {
        &self.errors
    }

    /// Number of retained errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when every error was redundant or there were none
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok` when nothing is left to report
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AggregateError {}

/// Serializes as the array of formatted errors
impl Serialize for AggregateError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.errors.serialize(serializer)
    }
}

impl<'a> IntoIterator for &'a AggregateError {
    type Item = &'a FormattedError;
    type IntoIter = slice::Iter<'a, FormattedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AggregateError {
    type Item = FormattedError;
    type IntoIter = std::vec::IntoIter<FormattedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
