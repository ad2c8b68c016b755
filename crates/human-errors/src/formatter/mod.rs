//! Single-error formatting
//!
//! Turns one [`RawValidationError`] into a [`FormattedError`]: a capitalized,
//! period-terminated sentence plus the location of the failing value.
//!
//! The message is chosen in order of preference:
//!
//! 1. the schema author's `errorMessage`, prefixed with the field preamble
//! 2. the keyword template from [`Keyword::message`]
//! 3. the validator's own message, prefixed with the field preamble
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

pub mod keyword;

use crate::humanize::capitalize;
use crate::options::{FieldLabels, FormatOptions};
use crate::pointer::json_pointer_to_json_path;
use crate::raw::RawValidationError;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};

pub use keyword::{format_label, Keyword, KeywordMessage};

/// A validation error rewritten for people
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{message}")]
pub struct FormattedError {
    /// JSON Path of the failing value
    pub path: String,
    /// JSON Pointer of the failing value, as the validator reported it
    pub pointer: String,
    /// Complete sentence describing the failure
    pub message: String,
    /// The raw validator error, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<RawValidationError>,
    /// The failing value, when requested and reported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl FormattedError {
    /// Format `raw`, or `None` if it only repeats another error
    pub fn from_raw(raw: &RawValidationError, options: &FormatOptions) -> Option<Self> {
        humanize(raw, options).into_formatted()
    }
}

/// Result of formatting one raw error
#[derive(Debug, Clone, PartialEq)]
pub enum Humanized {
    /// Duplicates another error; leave it out of any output
    Redundant,
    /// A message worth showing
    Formatted(FormattedError),
}

impl Humanized {
    /// Whether the error should be dropped
    pub fn is_redundant(&self) -> bool {
        matches!(self, Humanized::Redundant)
    }

    /// The formatted error, unless redundant
    pub fn into_formatted(self) -> Option<FormattedError> {
        match self {
            Humanized::Redundant => None,
            Humanized::Formatted(err) => Some(err),
        }
    }
}

/// Format a single raw validation error
pub fn humanize(raw: &RawValidationError, options: &FormatOptions) -> Humanized {
    let preamble = field_preamble(raw, options.field_labels);

    let message = match compose(raw, &preamble) {
        KeywordMessage::Suppressed => {
            debug!(
                pointer = %raw.pointer,
                schema_path = %raw.schema_path,
                "suppressing redundant propertyNames pattern error"
            );
            return Humanized::Redundant;
        }
        KeywordMessage::Formatted(text) => text,
    };

    Humanized::Formatted(FormattedError {
        path: json_pointer_to_json_path(&raw.pointer),
        pointer: raw.pointer.clone(),
        message: format!("{}.", capitalize(&message)),
        original: options.include_original_error.then(|| raw.clone()),
        data: if options.include_data { raw.data.clone() } else { None },
    })
}

fn compose(raw: &RawValidationError, preamble: &str) -> KeywordMessage {
    if let Some(custom) = raw.schema_annotation("errorMessage") {
        return KeywordMessage::Formatted(format!("{} {}", preamble, custom));
    }

    match Keyword::from_name(&raw.keyword) {
        Some(keyword) => {
            if let Some(message) = keyword.message(raw, preamble) {
                return message;
            }
            trace!(keyword = %raw.keyword, "params do not fit the keyword template; using validator message");
        }
        None => trace!(keyword = %raw.keyword, "no template for keyword; using validator message"),
    }

    if raw.message.is_empty() {
        KeywordMessage::Formatted(format!("{} is invalid", preamble))
    } else {
        KeywordMessage::Formatted(format!("{} {}", preamble, raw.message))
    }
}

/// The sentence subject naming the failing value
pub fn field_preamble(raw: &RawValidationError, labels: FieldLabels) -> String {
    let pointer = raw.pointer.as_str();

    match labels {
        FieldLabels::Js => {
            if pointer.is_empty() {
                return "the root value".to_string();
            }
            let path = json_pointer_to_json_path(pointer);
            format!("the value at {}", path.strip_prefix('$').unwrap_or(&path))
        }
        FieldLabels::JsonPath => format!("the value at {}", json_pointer_to_json_path(pointer)),
        FieldLabels::JsonPointer | FieldLabels::InstancePath => {
            if pointer.is_empty() {
                "the root value".to_string()
            } else {
                format!("the value at {}", pointer)
            }
        }
        FieldLabels::Title => {
            if let Some(title) = raw.schema_annotation("title") {
                title.to_string()
            } else if pointer.is_empty() {
                "the root value".to_string()
            } else {
                format!("the value at {}", pointer)
            }
        }
    }
}
