//! Human Errors - readable messages for JSON Schema validation failures
//!
//! Validators describe failures in terms of keywords, params and JSON
//! Pointers. This crate rewrites each failure as a complete English sentence
//! that an API consumer can read directly:
//!
//! - **Humanization helpers**: pluralization, articles, list joining, type names
//! - **Path conversion**: JSON Pointer to JSON Path
//! - **Single-error formatting**: keyword templates, field labels, schema overrides
//! - **Aggregation**: many errors to one message or one JSON array
//!
//! ## Quick Start
//!
//! ```rust
//! use human_errors::{AggregateError, FormatOptions, RawValidationError};
//! use serde_json::json;
//!
//! let raw = RawValidationError::from_value(json!({
//!     "dataPath": "",
//!     "keyword": "type",
//!     "params": { "type": "object" },
//!     "data": [],
//!     "parentSchema": { "type": "object" },
//!     "schemaPath": "#/type",
//!     "message": "should be object"
//! })).unwrap();
//!
//! let errors = AggregateError::new(&[raw], &FormatOptions::default());
//! assert_eq!(errors.message(), "The root value should be an object but it was an array.");
//! ```
//!
//! ## Schema Extensions
//!
//! - `title`: names the field in messages (with `fieldLabels: "title"`)
//! - `errorMessage`: replaces the generated message entirely
//! - `patternLabel`: describes what a `pattern` is meant to match
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod aggregate;
pub mod error;
pub mod formatter;
pub mod humanize;
pub mod options;
pub mod pointer;
pub mod raw;

// Re-export commonly used types for convenience
pub use aggregate::AggregateError;
pub use error::{Error, Result};
pub use formatter::{field_preamble, humanize, FormattedError, Humanized, Keyword, KeywordMessage};
pub use options::{FieldLabels, FormatOptions};
pub use pointer::{humanize_pointer, json_pointer_to_json_path};
pub use raw::RawValidationError;
