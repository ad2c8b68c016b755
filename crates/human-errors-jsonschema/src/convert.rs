//! Conversion of `jsonschema` errors into AJV-shaped raw records
//!
//! `jsonschema` reports where a failure happened (instance path and schema
//! path) and what kind it was. The formatter expects AJV's shape instead: a
//! keyword name, the schema node declaring it, and keyword-specific params.
//! This module rebuilds that shape from the schema itself and the failing
//! value.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use human_errors::humanize::humanize_value;
use human_errors::pointer::segments;
use human_errors::RawValidationError;
use jsonschema::error::ValidationErrorKind;
use jsonschema::ValidationError;
use serde_json::{json, Map, Value};

/// What the next schema-path token is expected to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// A keyword of the current schema node
    Keyword,
    /// A key of a map whose values are schemas, e.g. under `properties`
    Name(MapKind),
    /// An index into an array of schemas, e.g. under `allOf`
    Index,
    /// Something inside a plain keyword value; no more keywords follow
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MapKind {
    Schemas,
    Dependencies,
}

/// Details only the validator's error kind can tell us
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Reported {
    MissingProperty(Value),
    UnexpectedProperties(Vec<String>),
    PropertyName(Value),
    Other,
}

impl Reported {
    fn from_kind(kind: &ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::Required { property } => Reported::MissingProperty(property.clone()),
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                Reported::UnexpectedProperties(unexpected.clone())
            }
            ValidationErrorKind::PropertyNames { error } => {
                Reported::PropertyName(error.instance.clone().into_owned())
            }
            _ => Reported::Other,
        }
    }
}

/// A keyword found along a schema path
#[derive(Debug, Clone)]
pub(crate) struct KeywordSite<'s> {
    pub keyword: String,
    /// Position of the keyword token in the schema path
    pub index: usize,
    /// The schema node holding the keyword, if it could be resolved
    pub parent: Option<&'s Value>,
}

fn after_keyword(keyword: &str, value: Option<&Value>) -> Expect {
    match keyword {
        "properties" | "patternProperties" | "$defs" | "definitions" | "dependentSchemas" => {
            Expect::Name(MapKind::Schemas)
        }
        "dependencies" | "dependentRequired" => Expect::Name(MapKind::Dependencies),
        "allOf" | "anyOf" | "oneOf" | "prefixItems" => Expect::Index,
        "items" if value.map_or(false, Value::is_array) => Expect::Index,
        "items" | "additionalItems" | "unevaluatedItems" | "contains" | "not" | "if" | "then"
        | "else" | "additionalProperties" | "unevaluatedProperties" | "propertyNames"
        | "contentSchema" => Expect::Keyword,
        _ => Expect::Value,
    }
}

/// Follow a local `$ref` on `node`, e.g. `#/$defs/name`
fn follow_ref<'s>(root: &'s Value, node: &'s Value) -> Option<&'s Value> {
    let reference = node.get("$ref")?.as_str()?;
    let pointer = reference.strip_prefix('#')?;
    root.pointer(pointer)
}

/// Walk a schema path from the root, returning every keyword on the way.
pub(crate) fn keyword_sites<'s>(root: &'s Value, tokens: &[String]) -> Vec<KeywordSite<'s>> {
    let mut sites = Vec::new();
    let mut node = Some(root);
    let mut expect = Expect::Keyword;

    for (index, token) in tokens.iter().enumerate() {
        match expect {
            Expect::Keyword => {
                if token == "$ref" || token == "$dynamicRef" {
                    node = node.and_then(|n| follow_ref(root, n));
                    continue;
                }
                // validators may omit the `$ref` hop from the path
                if let Some(n) = node.filter(|n| n.get(token.as_str()).is_none()) {
                    node = follow_ref(root, n).or(Some(n));
                }
                sites.push(KeywordSite {
                    keyword: token.clone(),
                    index,
                    parent: node,
                });
                let value = node.and_then(|n| n.get(token.as_str()));
                expect = after_keyword(token, value);
                node = value;
            }
            Expect::Name(kind) => {
                let value = node.and_then(|n| n.get(token.as_str()));
                expect = match kind {
                    MapKind::Dependencies if value.map_or(true, |v| !v.is_object()) => Expect::Value,
                    _ => Expect::Keyword,
                };
                node = value;
            }
            Expect::Index => {
                node = token
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| node.and_then(|n| n.get(i)));
                expect = Expect::Keyword;
            }
            Expect::Value => break,
        }
    }

    sites
}

/// AJV-style duplicate search: `i` scans from the end, `j` from `i - 1` down.
pub(crate) fn duplicate_pair(items: &[Value]) -> Option<(usize, usize)> {
    (0..items.len())
        .rev()
        .find_map(|i| (0..i).rev().find(|&j| items[i] == items[j]).map(|j| (i, j)))
}

fn params(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// The property present in `data` whose dependency list names `missing`.
///
/// `jsonschema` reports array dependencies at `/dependencies` (or
/// `/dependentRequired`) without the triggering property, so it is looked up
/// from the declared map. The first matching property in declaration order wins.
fn dependency_trigger<'s>(declared: Option<&'s Value>, data: &Value, missing: &Value) -> Option<&'s str> {
    let object = data.as_object()?;
    declared?
        .as_object()?
        .iter()
        .find(|(name, required)| {
            object.contains_key(name.as_str())
                && required.as_array().map_or(false, |names| names.contains(missing))
        })
        .map(|(name, _)| name.as_str())
}

/// AJV's wording for a failure, used when no keyword template applies.
///
/// `jsonschema`'s own messages are full sentences with the value as subject,
/// which read badly after a field preamble.
fn predicate(kind: &ValidationErrorKind) -> Option<String> {
    let text = match kind {
        ValidationErrorKind::Constant { .. } => "should be equal to constant".to_string(),
        ValidationErrorKind::Contains => "should contain a valid item".to_string(),
        ValidationErrorKind::AnyOf { .. } => "should match some schema in anyOf".to_string(),
        ValidationErrorKind::OneOfNotValid { .. } | ValidationErrorKind::OneOfMultipleValid { .. } => {
            "should match exactly one schema in oneOf".to_string()
        }
        ValidationErrorKind::Not { .. } => "should NOT be valid".to_string(),
        ValidationErrorKind::FalseSchema => "boolean schema is false".to_string(),
        ValidationErrorKind::AdditionalProperties { .. } => {
            "should NOT have additional properties".to_string()
        }
        ValidationErrorKind::UnevaluatedProperties { .. } => {
            "should NOT have unevaluated properties".to_string()
        }
        ValidationErrorKind::UnevaluatedItems { .. } => "should NOT have unevaluated items".to_string(),
        ValidationErrorKind::AdditionalItems { limit } => {
            format!("should NOT have more than {} items", limit)
        }
        ValidationErrorKind::Enum { .. } => "should be equal to one of the allowed values".to_string(),
        ValidationErrorKind::UniqueItems => "should NOT have duplicate items".to_string(),
        ValidationErrorKind::Format { format } => format!("should match format \"{}\"", format),
        ValidationErrorKind::Pattern { pattern } => format!("should match pattern \"{}\"", pattern),
        ValidationErrorKind::Required { property } => {
            format!("should have required property '{}'", humanize_value(property))
        }
        ValidationErrorKind::MultipleOf { multiple_of } => {
            format!("should be multiple of {}", humanize_value(&json!(multiple_of)))
        }
        ValidationErrorKind::Minimum { limit } => format!("should be >= {}", humanize_value(limit)),
        ValidationErrorKind::Maximum { limit } => format!("should be <= {}", humanize_value(limit)),
        ValidationErrorKind::ExclusiveMinimum { limit } => format!("should be > {}", humanize_value(limit)),
        ValidationErrorKind::ExclusiveMaximum { limit } => format!("should be < {}", humanize_value(limit)),
        ValidationErrorKind::MinLength { limit } => {
            format!("should NOT be shorter than {} characters", limit)
        }
        ValidationErrorKind::MaxLength { limit } => {
            format!("should NOT be longer than {} characters", limit)
        }
        ValidationErrorKind::MinItems { limit } => format!("should NOT have fewer than {} items", limit),
        ValidationErrorKind::MaxItems { limit } => format!("should NOT have more than {} items", limit),
        ValidationErrorKind::MinProperties { limit } => {
            format!("should NOT have fewer than {} properties", limit)
        }
        ValidationErrorKind::MaxProperties { limit } => {
            format!("should NOT have more than {} properties", limit)
        }
        ValidationErrorKind::Custom { message } => message.clone(),
        _ => return None,
    };
    Some(text)
}

/// Keyword params derived from the declaring schema node and failing data.
///
/// Returns one param map per raw record to emit; an empty map means the
/// keyword carries no params (or they could not be derived).
fn derive_params(
    keyword: &str,
    parent: &Value,
    data: &Value,
    reported: &Reported,
    dependency: Option<&str>,
) -> Vec<Map<String, Value>> {
    let declared = parent.get(keyword);

    let single = match keyword {
        "type" => match declared {
            Some(Value::String(name)) => params(&[("type", json!(name))]),
            Some(Value::Array(names)) => {
                let joined: Vec<&str> = names.iter().filter_map(Value::as_str).collect();
                params(&[("type", json!(joined.join(",")))])
            }
            _ => Map::new(),
        },
        "enum" => declared
            .map(|values| params(&[("allowedValues", values.clone())]))
            .unwrap_or_default(),
        "minLength" | "maxLength" | "minItems" | "maxItems" | "minProperties" | "maxProperties"
        | "minimum" | "maximum" => declared
            .map(|limit| params(&[("limit", limit.clone())]))
            .unwrap_or_default(),
        "exclusiveMinimum" | "exclusiveMaximum" => {
            // draft-04 spells these as booleans next to minimum/maximum
            let limit = match declared {
                Some(Value::Bool(_)) if keyword == "exclusiveMinimum" => parent.get("minimum"),
                Some(Value::Bool(_)) => parent.get("maximum"),
                other => other,
            };
            limit
                .map(|limit| params(&[("limit", limit.clone())]))
                .unwrap_or_default()
        }
        "multipleOf" | "pattern" | "format" => declared
            .map(|value| params(&[(keyword, value.clone())]))
            .unwrap_or_default(),
        "uniqueItems" => data
            .as_array()
            .and_then(|items| duplicate_pair(items))
            .map(|(i, j)| params(&[("i", json!(i)), ("j", json!(j))]))
            .unwrap_or_default(),
        "required" => match reported {
            Reported::MissingProperty(property) => params(&[("missingProperty", property.clone())]),
            _ => Map::new(),
        },
        "additionalProperties" => {
            return match reported {
                Reported::UnexpectedProperties(unexpected) if !unexpected.is_empty() => unexpected
                    .iter()
                    .map(|name| params(&[("additionalProperty", json!(name))]))
                    .collect(),
                _ => vec![Map::new()],
            };
        }
        "propertyNames" => match reported {
            Reported::PropertyName(name) => params(&[("propertyName", name.clone())]),
            _ => Map::new(),
        },
        "dependencies" | "dependentRequired" => {
            let property = match (dependency, reported) {
                (Some(property), _) => property,
                (None, Reported::MissingProperty(missing)) => {
                    match dependency_trigger(declared, data, missing) {
                        Some(property) => property,
                        None => return vec![Map::new()],
                    }
                }
                (None, _) => return vec![Map::new()],
            };
            if let Reported::MissingProperty(missing) = reported {
                params(&[("property", json!(property)), ("missingProperty", missing.clone())])
            } else {
                let required = declared
                    .and_then(|deps| deps.get(property))
                    .and_then(Value::as_array);
                let missing: Vec<&Value> = match (required, data.as_object()) {
                    (Some(required), Some(object)) => required
                        .iter()
                        .filter(|name| name.as_str().map_or(false, |n| !object.contains_key(n)))
                        .collect(),
                    _ => Vec::new(),
                };
                if missing.is_empty() {
                    return vec![Map::new()];
                }
                return missing
                    .into_iter()
                    .map(|name| params(&[("property", json!(property)), ("missingProperty", name.clone())]))
                    .collect();
            }
        }
        _ => Map::new(),
    };

    vec![single]
}

/// Convert one `jsonschema` error into the raw records AJV would report.
///
/// Most errors map to one record; an `additionalProperties` failure naming
/// several properties becomes one record per property.
pub fn to_raw_errors(root: &Value, error: &ValidationError<'_>) -> Vec<RawValidationError> {
    let pointer = error.instance_path.to_string();
    let schema_location = error.schema_path.to_string();
    let tokens = segments(&schema_location);
    let sites = keyword_sites(root, &tokens);
    let reported = Reported::from_kind(&error.kind);

    let site = match reported {
        Reported::PropertyName(_) => sites
            .iter()
            .rev()
            .find(|site| site.keyword == "propertyNames")
            .or_else(|| sites.last()),
        _ => sites.last(),
    };

    let (keyword, parent, dependency) = match site {
        Some(site) => (
            site.keyword.clone(),
            site.parent.cloned().unwrap_or_else(|| json!({})),
            tokens.get(site.index + 1).map(String::as_str),
        ),
        None => (tokens.last().cloned().unwrap_or_default(), json!({}), None),
    };

    let schema_path = match site {
        Some(site) if keyword == "propertyNames" => {
            let prefix: String = tokens[..=site.index]
                .iter()
                .map(|t| format!("/{}", t.replace('~', "~0").replace('/', "~1")))
                .collect();
            format!("#{}", prefix)
        }
        _ => format!("#{}", schema_location),
    };

    let data = error.instance.clone().into_owned();
    let declared = parent.get(keyword.as_str()).cloned();
    let message = predicate(&error.kind).unwrap_or_else(|| error.to_string());

    derive_params(&keyword, &parent, &data, &reported, dependency)
        .into_iter()
        .map(|params| {
            let mut raw = RawValidationError::new(pointer.clone(), keyword.clone())
                .with_data(data.clone())
                .with_parent_schema(parent.clone())
                .with_schema_path(schema_path.clone())
                .with_message(message.clone());
            raw.params = params;
            raw.schema = declared.clone();
            raw
        })
        .collect()
}
