//! Keyword-specific message builders
//!
//! Each known keyword has a sentence template. Builders read the keyword's
//! params (and sometimes the failing data); when those are missing or have
//! the wrong shape the builder declines and the caller falls back to the
//! validator's own message.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::humanize::{humanize_list, humanize_type_of, humanize_value, indefinite_article, pluralize};
use crate::raw::RawValidationError;
use serde_json::Value;

/// Human names for the string formats validators know about
const FORMAT_LABELS: &[(&str, &str)] = &[
    ("date-time", "date and time"),
    ("time", "time"),
    ("date", "date"),
    ("email", "email address"),
    ("hostname", "hostname"),
    ("ipv4", "IPv4 address"),
    ("ipv6", "IPv6 address"),
    ("uri", "URI"),
    ("uri-reference", "URI Reference"),
    ("uri-template", "URI-template"),
    ("json-pointer", "JSON Pointer"),
    ("relative-json-pointer", "relative JSON Pointer"),
    ("regex", "regular expression"),
];

/// Label for a string format, or the format name itself if unlisted
pub fn format_label(format: &str) -> &str {
    FORMAT_LABELS
        .iter()
        .find(|(name, _)| *name == format)
        .map(|(_, label)| *label)
        .unwrap_or(format)
}

/// Outcome of a message builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordMessage {
    /// The error repeats another one and should not be shown
    Suppressed,
    /// Sentence fragment, not yet capitalized or terminated
    Formatted(String),
}

/// Validation keywords with a dedicated message template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Enum,
    Type,
    MinLength,
    MaxLength,
    Pattern,
    Format,
    MultipleOf,
    Minimum,
    ExclusiveMinimum,
    Maximum,
    ExclusiveMaximum,
    AdditionalProperties,
    Required,
    PropertyNames,
    MinProperties,
    MaxProperties,
    Dependencies,
    MinItems,
    MaxItems,
    UniqueItems,
}

impl Keyword {
    /// Every keyword with a template
    pub const ALL: [Keyword; 20] = [
        Keyword::Enum,
        Keyword::Type,
        Keyword::MinLength,
        Keyword::MaxLength,
        Keyword::Pattern,
        Keyword::Format,
        Keyword::MultipleOf,
        Keyword::Minimum,
        Keyword::ExclusiveMinimum,
        Keyword::Maximum,
        Keyword::ExclusiveMaximum,
        Keyword::AdditionalProperties,
        Keyword::Required,
        Keyword::PropertyNames,
        Keyword::MinProperties,
        Keyword::MaxProperties,
        Keyword::Dependencies,
        Keyword::MinItems,
        Keyword::MaxItems,
        Keyword::UniqueItems,
    ];

    /// Look up a keyword by its schema name.
    ///
    /// `dependentRequired` shares the `dependencies` template.
    pub fn from_name(name: &str) -> Option<Self> {
        if name == "dependentRequired" {
            return Some(Keyword::Dependencies);
        }
        Self::ALL.into_iter().find(|keyword| keyword.as_str() == name)
    }

    /// The keyword's schema name
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Enum => "enum",
            Keyword::Type => "type",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::Pattern => "pattern",
            Keyword::Format => "format",
            Keyword::MultipleOf => "multipleOf",
            Keyword::Minimum => "minimum",
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::Maximum => "maximum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::Required => "required",
            Keyword::PropertyNames => "propertyNames",
            Keyword::MinProperties => "minProperties",
            Keyword::MaxProperties => "maxProperties",
            Keyword::Dependencies => "dependencies",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::UniqueItems => "uniqueItems",
        }
    }

    /// Build the message for `err`, with `preamble` as the sentence subject.
    ///
    /// Returns `None` when the params don't carry what the template needs.
    pub fn message(&self, err: &RawValidationError, preamble: &str) -> Option<KeywordMessage> {
        let text = match self {
            // -- base keywords
            Keyword::Enum => {
                let allowed: Vec<String> = err
                    .param("allowedValues")?
                    .as_array()?
                    .iter()
                    .map(Value::to_string)
                    .collect();
                format!("{} should be one of: {}", preamble, humanize_list(&allowed, "or"))
            }
            Keyword::Type => {
                let types = type_names(err.param("type")?)?;
                let expected = humanize_list(&types, "or");
                format!(
                    "{} should be {} {} but it was {}",
                    preamble,
                    indefinite_article(&expected),
                    expected,
                    humanize_type_of(err.data.as_ref())
                )
            }

            // -- strings
            Keyword::MinLength => length_message(err, preamble, "or more")?,
            Keyword::MaxLength => length_message(err, preamble, "or fewer")?,
            Keyword::Pattern => {
                if err.schema_path.ends_with("propertyNames/pattern") {
                    return Some(KeywordMessage::Suppressed);
                }
                match err.schema_annotation("patternLabel") {
                    Some(label) => format!("{} should be {} but it was not", preamble, label),
                    None => format!("{} is an invalid string", preamble),
                }
            }
            Keyword::Format => {
                let format = err.param("format")?.as_str()?;
                format!(
                    "{} should be a valid {} string but it was not",
                    preamble,
                    format_label(format)
                )
            }

            // -- numbers
            Keyword::MultipleOf => {
                let n = number_param(err, "multipleOf")?;
                format!("{} should be a multiple of {}", preamble, n)
            }
            Keyword::Minimum => {
                format!("{} should be equal to or greater than {}", preamble, number_param(err, "limit")?)
            }
            Keyword::ExclusiveMinimum => {
                format!("{} should be greater than {}", preamble, number_param(err, "limit")?)
            }
            Keyword::Maximum => {
                format!("{} should be equal to or less than {}", preamble, number_param(err, "limit")?)
            }
            Keyword::ExclusiveMaximum => {
                format!("{} should be less than {}", preamble, number_param(err, "limit")?)
            }

            // -- objects
            Keyword::AdditionalProperties => {
                let allowed: Vec<&str> = err
                    .parent_schema
                    .get("properties")?
                    .as_object()?
                    .keys()
                    .map(String::as_str)
                    .collect();
                let found = humanize_value(err.param("additionalProperty")?);
                format!(
                    "{} has an unexpected property, {}, which is not in the list of allowed properties ({})",
                    preamble,
                    found,
                    allowed.join(", ")
                )
            }
            Keyword::Required => {
                let missing = humanize_value(err.param("missingProperty")?);
                format!("{} is missing the required field '{}'", preamble, missing)
            }
            Keyword::PropertyNames => {
                let name = err.param("propertyName")?;
                format!("{} has an invalid property name {}", preamble, name)
            }
            Keyword::MinProperties => size_message(err, preamble, "or more", "properties")?,
            Keyword::MaxProperties => size_message(err, preamble, "or fewer", "properties")?,
            Keyword::Dependencies => {
                let property = humanize_value(err.param("property")?);
                let missing = humanize_value(err.param("missingProperty")?);
                format!(
                    "{} should have property {} when {} is present",
                    preamble, missing, property
                )
            }

            // -- arrays
            Keyword::MinItems => size_message(err, preamble, "or more", "items")?,
            Keyword::MaxItems => size_message(err, preamble, "or fewer", "items")?,
            Keyword::UniqueItems => {
                let i = humanize_value(err.param("i")?);
                let j = humanize_value(err.param("j")?);
                format!("{} should be unique but elements {} and {} are the same", preamble, j, i)
            }
        };

        Some(KeywordMessage::Formatted(text))
    }
}

/// Expected type names from a `type` param: either "a,b" or ["a", "b"]
fn type_names(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::String(s) => Some(s.split(',').map(str::to_string).collect()),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => None,
    }
}

/// A numeric param rendered for a sentence
fn number_param(err: &RawValidationError, key: &str) -> Option<String> {
    let value = err.param(key)?;
    value.is_number().then(|| humanize_value(value))
}

/// A non-negative integral param, e.g. a length limit
fn count_param(err: &RawValidationError, key: &str) -> Option<u64> {
    let value = err.param(key)?;
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| *f >= 0.0 && f.fract() == 0.0)
            .map(|f| f as u64)
    })
}

fn length_message(err: &RawValidationError, preamble: &str, bound: &str) -> Option<String> {
    let limit = count_param(err, "limit")?;
    let actual = err.data.as_ref()?.as_str()?.chars().count() as u64;

    Some(format!(
        "{} should be {} {} {} but it was {} {}",
        preamble,
        limit,
        pluralize("character", limit),
        bound,
        actual,
        pluralize("character", actual)
    ))
}

fn size_message(err: &RawValidationError, preamble: &str, bound: &str, noun: &str) -> Option<String> {
    let limit = count_param(err, "limit")?;
    let actual = match err.data.as_ref()? {
        Value::Object(map) => map.len(),
        Value::Array(items) => items.len(),
        _ => return None,
    };

    Some(format!(
        "{} should have {} {} {} but it has {}",
        preamble, limit, bound, noun, actual
    ))
}
