//! Human Errors for `jsonschema`
//!
//! Runs [`jsonschema`] validation and hands the failures to the
//! [`human_errors`] formatter, so callers get sentences like
//! "The value at /foo should be a string but it was a number." instead of
//! raw validator output.
//!
//! ```rust
//! use human_errors::FormatOptions;
//! use human_errors_jsonschema::SchemaHumanizer;
//! use serde_json::json;
//!
//! let humanizer = SchemaHumanizer::new(
//!     &json!({ "type": "string", "minLength": 1 }),
//!     FormatOptions::default(),
//! ).unwrap();
//!
//! let errors = humanizer.validate(&json!("")).unwrap_err();
//! assert_eq!(
//!     errors.message(),
//!     "The root value should be 1 character or more but it was 0 characters."
//! );
//! ```
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod convert;
pub mod error;
pub mod humanizer;

pub use convert::to_raw_errors;
pub use error::{Error, Result};
pub use humanizer::{humanize_errors, SchemaHumanizer};
