//! Formatting options
//!
//! Options are plain data: they deserialize from JSON (or any serde format)
//! with missing keys taking their defaults, and can be assembled in code with
//! the builder helpers.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// How the subject of each sentence names the failing value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldLabels {
    /// JavaScript accessor style: `.foo[0]`
    Js,
    /// JSON Path: `$.foo[0]`
    JsonPath,
    /// Raw JSON Pointer: `/foo/0`
    JsonPointer,
    /// Same rendering as `JsonPointer`, named after the validator's field
    InstancePath,
    /// The schema node's `title`, falling back to the pointer
    #[default]
    Title,
}

impl FieldLabels {
    /// The configuration name of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabels::Js => "js",
            FieldLabels::JsonPath => "jsonPath",
            FieldLabels::JsonPointer => "jsonPointer",
            FieldLabels::InstancePath => "instancePath",
            FieldLabels::Title => "title",
        }
    }
}

impl fmt::Display for FieldLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldLabels {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "js" => Ok(FieldLabels::Js),
            "jsonPath" => Ok(FieldLabels::JsonPath),
            "jsonPointer" => Ok(FieldLabels::JsonPointer),
            "instancePath" => Ok(FieldLabels::InstancePath),
            "title" => Ok(FieldLabels::Title),
            other => Err(Error::InvalidFieldLabels(other.to_string())),
        }
    }
}

impl TryFrom<String> for FieldLabels {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FieldLabels> for String {
    fn from(labels: FieldLabels) -> Self {
        labels.as_str().to_string()
    }
}

/// Options controlling a formatting call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// How to name the failing value
    pub field_labels: FieldLabels,
    /// Attach the raw validator error to each formatted error
    pub include_original_error: bool,
    /// Attach the failing value to each formatted error
    pub include_data: bool,
}

impl FormatOptions {
    /// Default options: title labels, no original error, no data
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON document, filling gaps with defaults
    pub fn from_value(value: &Value) -> Result<Self> {
        Self::deserialize(value).map_err(Error::InvalidOptions)
    }

    /// Set the field label mode
    pub fn with_field_labels(mut self, field_labels: FieldLabels) -> Self {
        self.field_labels = field_labels;
        self
    }

    /// Attach the raw validator error to each formatted error
    pub fn with_original_error(mut self) -> Self {
        self.include_original_error = true;
        self
    }

    /// Attach the failing value to each formatted error
    pub fn with_data(mut self) -> Self {
        self.include_data = true;
        self
    }
}
