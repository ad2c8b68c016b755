//! Raw validation error records
//!
//! A [`RawValidationError`] is the validator's own description of one failed
//! constraint, in the shape AJV produces with `verbose: true`. Records can be
//! deserialized straight from AJV output or built in code.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One failed constraint as reported by the validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValidationError {
    /// JSON Pointer to the failing value; empty for the root
    #[serde(rename = "dataPath", alias = "instancePath", default)]
    pub pointer: String,

    /// Name of the failed rule, e.g. `minLength`
    pub keyword: String,

    /// Keyword-dependent details, e.g. `limit` or `missingProperty`
    #[serde(default)]
    pub params: Map<String, Value>,

    /// The failing value. `None` when the validator did not report it, which
    /// is different from a reported JSON `null`.
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub data: Option<Value>,

    /// The schema node declaring the failed constraint
    #[serde(default)]
    pub parent_schema: Value,

    /// The keyword's own value within `parent_schema`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,

    /// Pointer into the schema, e.g. `#/properties/arr/uniqueItems`
    #[serde(default)]
    pub schema_path: String,

    /// The validator's own message, used when no better one can be built
    #[serde(default)]
    pub message: String,
}

fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl RawValidationError {
    /// Create a record for `keyword` failing at `pointer`
    pub fn new<P, K>(pointer: P, keyword: K) -> Self
    where
        P: Into<String>,
        K: Into<String>,
    {
        Self {
            pointer: pointer.into(),
            keyword: keyword.into(),
            params: Map::new(),
            data: None,
            parent_schema: Value::Object(Map::new()),
            schema: None,
            schema_path: String::new(),
            message: String::new(),
        }
    }

    /// Parse a record from AJV-shaped JSON
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::MalformedRecord)
    }

    /// Add one keyword parameter
    pub fn with_param<K: Into<String>>(mut self, key: K, value: Value) -> Self {
        self.params.insert(key.into(), value);
        self
    }

    /// Set the failing value
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    /// Set the schema node that declared the constraint
    pub fn with_parent_schema(mut self, parent_schema: Value) -> Self {
        self.parent_schema = parent_schema;
        self
    }

    /// Set the keyword's schema value
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Set the schema path
    pub fn with_schema_path<S: Into<String>>(mut self, schema_path: S) -> Self {
        self.schema_path = schema_path.into();
        self
    }

    /// Set the validator's fallback message
    pub fn with_message<S: Into<String>>(mut self, message: S) -> Self {
        self.message = message.into();
        self
    }

    /// A parameter by name
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// A non-empty string annotation on the parent schema, such as `title`
    pub fn schema_annotation(&self, key: &str) -> Option<&str> {
        self.parent_schema
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}
