//! Keyword message tests
//!
//! Each case feeds an AJV-shaped record (as produced with `verbose: true`
//! and `jsonPointers: true`) through the formatter and checks the sentence.

use human_errors::{
    AggregateError, FieldLabels, FormatOptions, FormattedError, RawValidationError,
};
use serde_json::{json, Value};

fn record(value: Value) -> RawValidationError {
    RawValidationError::from_value(value).unwrap()
}

fn message(value: Value) -> String {
    message_with(value, FormatOptions::default())
}

fn message_with(value: Value, options: FormatOptions) -> String {
    FormattedError::from_raw(&record(value), &options)
        .expect("error should not be redundant")
        .message
}

#[cfg(test)]
mod base_keywords {
    use super::*;

    #[test]
    fn test_type_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "type", "params": { "type": "object" },
                "data": [], "parentSchema": { "type": "object" }, "schemaPath": "#/type"
            })),
            "The root value should be an object but it was an array."
        );

        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "type", "params": { "type": "object" },
                "data": 1, "parentSchema": { "type": "object" }, "schemaPath": "#/type"
            })),
            "The root value should be an object but it was a number."
        );

        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "type", "params": { "type": "number" },
                "data": "oops", "parentSchema": { "type": "number" }, "schemaPath": "#/type"
            })),
            "The root value should be a number but it was a string."
        );

        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "type", "params": { "type": "number,string" },
                "data": {}, "parentSchema": { "type": ["number", "string"] }, "schemaPath": "#/type"
            })),
            "The root value should be a number or string but it was an object."
        );
    }

    #[test]
    fn test_nested_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "/foo/bar", "keyword": "type", "params": { "type": "string" },
                "data": {}, "parentSchema": { "type": "string" },
                "schemaPath": "#/properties/foo/properties/bar/type"
            })),
            "The value at /foo/bar should be a string but it was an object."
        );
    }

    #[test]
    fn test_enum_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "enum",
                "params": { "allowedValues": ["foo", "bar", 10] },
                "data": {}, "parentSchema": { "enum": ["foo", "bar", 10] }, "schemaPath": "#/enum"
            })),
            "The root value should be one of: \"foo\", \"bar\", or 10."
        );
    }
}

#[cfg(test)]
mod options {
    use super::*;

    fn smurf() -> Value {
        json!({
            "dataPath": "/foo", "keyword": "type", "params": { "type": "string" },
            "data": 1, "parentSchema": { "title": "Smurf", "type": "string" },
            "schemaPath": "#/properties/foo/type", "message": "should be string"
        })
    }

    #[test]
    fn test_field_labels() {
        let cases = [
            (FieldLabels::Js, "The value at .foo should be a string but it was a number."),
            (FieldLabels::JsonPath, "The value at $.foo should be a string but it was a number."),
            (FieldLabels::JsonPointer, "The value at /foo should be a string but it was a number."),
            (FieldLabels::InstancePath, "The value at /foo should be a string but it was a number."),
            (FieldLabels::Title, "Smurf should be a string but it was a number."),
        ];

        for (labels, expected) in cases {
            assert_eq!(
                message_with(smurf(), FormatOptions::new().with_field_labels(labels)),
                expected,
                "fieldLabels: {}",
                labels
            );
        }
    }

    #[test]
    fn test_root_value_in_every_mode() {
        let root = json!({
            "dataPath": "", "keyword": "type", "params": { "type": "string" },
            "data": {}, "parentSchema": { "type": "string" }, "schemaPath": "#/type"
        });

        for labels in [FieldLabels::Js, FieldLabels::JsonPointer, FieldLabels::InstancePath, FieldLabels::Title] {
            let text = message_with(root.clone(), FormatOptions::new().with_field_labels(labels));
            assert!(text.starts_with("The root value "), "{}: {}", labels, text);
        }
    }

    #[test]
    fn test_include_original_error() {
        let original = json!({
            "data": {}, "dataPath": "", "keyword": "type", "message": "should be string",
            "params": { "type": "string" }, "parentSchema": { "type": "string" },
            "schema": "string", "schemaPath": "#/type"
        });

        let err = FormattedError::from_raw(&record(original.clone()), &FormatOptions::default()).unwrap();
        assert!(err.original.is_none());

        let err = FormattedError::from_raw(
            &record(original.clone()),
            &FormatOptions::new().with_original_error(),
        )
        .unwrap();
        assert_eq!(err.original, Some(record(original.clone())));
        assert_eq!(serde_json::to_value(err.original.unwrap()).unwrap(), original);
    }

    #[test]
    fn test_include_data() {
        let raw = json!({
            "dataPath": "", "keyword": "type", "params": { "type": "string" },
            "data": { "oops": true }, "parentSchema": { "type": "string" }, "schemaPath": "#/type"
        });

        let err = FormattedError::from_raw(&record(raw.clone()), &FormatOptions::default()).unwrap();
        assert!(err.data.is_none());

        let err = FormattedError::from_raw(&record(raw), &FormatOptions::new().with_data()).unwrap();
        assert_eq!(err.data, Some(json!({ "oops": true })));
    }
}

#[cfg(test)]
mod strings {
    use super::*;

    fn length(keyword: &str, limit: u64, data: &str) -> String {
        message(json!({
            "dataPath": "", "keyword": keyword, "params": { "limit": limit },
            "data": data, "parentSchema": { "type": "string", keyword: limit },
            "schemaPath": format!("#/{}", keyword)
        }))
    }

    #[test]
    fn test_length_errors() {
        assert_eq!(
            length("minLength", 10, "oops"),
            "The root value should be 10 characters or more but it was 4 characters."
        );
        assert_eq!(
            length("minLength", 1, ""),
            "The root value should be 1 character or more but it was 0 characters."
        );
        assert_eq!(
            length("maxLength", 3, "oops"),
            "The root value should be 3 characters or fewer but it was 4 characters."
        );
    }

    #[test]
    fn test_pattern_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "pattern", "params": { "pattern": "^\\d+$" },
                "data": "oops", "parentSchema": { "type": "string", "pattern": "^\\d+$" },
                "schemaPath": "#/pattern"
            })),
            "The root value is an invalid string."
        );

        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "pattern", "params": { "pattern": "^\\d+$" },
                "data": "oops",
                "parentSchema": { "type": "string", "pattern": "^\\d+$", "patternLabel": "an integer string" },
                "schemaPath": "#/pattern"
            })),
            "The root value should be an integer string but it was not."
        );
    }

    #[test]
    fn test_format_errors() {
        let cases = [
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
            ("uuid", "uuid"),
        ];

        for (format, label) in cases {
            assert_eq!(
                message(json!({
                    "dataPath": "", "keyword": "format", "params": { "format": format },
                    "data": "", "parentSchema": { "type": "string", "format": format },
                    "schemaPath": "#/format"
                })),
                format!("The root value should be a valid {} string but it was not.", label)
            );
        }
    }
}

#[cfg(test)]
mod numbers {
    use super::*;

    fn bound(keyword: &str, param: &str, limit: Value, data: Value) -> String {
        message(json!({
            "dataPath": "", "keyword": keyword, "params": { param: limit },
            "data": data, "parentSchema": { "type": "number", keyword: limit },
            "schemaPath": format!("#/{}", keyword)
        }))
    }

    #[test]
    fn test_multiple_of_errors() {
        assert_eq!(
            bound("multipleOf", "multipleOf", json!(10), json!(1)),
            "The root value should be a multiple of 10."
        );
    }

    #[test]
    fn test_range_errors() {
        assert_eq!(
            bound("minimum", "limit", json!(5), json!(1)),
            "The root value should be equal to or greater than 5."
        );
        assert_eq!(
            bound("exclusiveMinimum", "limit", json!(5), json!(5)),
            "The root value should be greater than 5."
        );
        assert_eq!(
            bound("maximum", "limit", json!(5), json!(10)),
            "The root value should be equal to or less than 5."
        );
        assert_eq!(
            bound("exclusiveMaximum", "limit", json!(5), json!(5)),
            "The root value should be less than 5."
        );
        assert_eq!(
            bound("maximum", "limit", json!(2.5), json!(3)),
            "The root value should be equal to or less than 2.5."
        );
    }
}

#[cfg(test)]
mod objects {
    use super::*;

    #[test]
    fn test_additional_property_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "additionalProperties",
                "params": { "additionalProperty": "c" },
                "data": { "a": 1, "b": 2, "c": 3 },
                "parentSchema": { "properties": { "a": {}, "d": {} }, "additionalProperties": false },
                "schemaPath": "#/additionalProperties"
            })),
            "The root value has an unexpected property, c, which is not in the list of allowed properties (a, d)."
        );
    }

    #[test]
    fn test_declared_properties_keep_schema_order() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "additionalProperties",
                "params": { "additionalProperty": "x" },
                "data": { "x": 1 },
                "parentSchema": { "properties": { "zeta": {}, "alpha": {} }, "additionalProperties": false },
                "schemaPath": "#/additionalProperties"
            })),
            "The root value has an unexpected property, x, which is not in the list of allowed properties (zeta, alpha)."
        );
    }

    #[test]
    fn test_required_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "required", "params": { "missingProperty": "bar" },
                "data": {}, "parentSchema": { "required": ["foo", "bar"] }, "schemaPath": "#/required"
            })),
            "The root value is missing the required field 'bar'."
        );
    }

    #[test]
    fn test_property_names_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "propertyNames", "params": { "propertyName": "oops" },
                "data": { "oops": 1 },
                "parentSchema": { "type": "object", "propertyNames": { "pattern": "^\\d+$" } },
                "schemaPath": "#/propertyNames"
            })),
            "The root value has an invalid property name \"oops\"."
        );
    }

    #[test]
    fn test_size_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "minProperties", "params": { "limit": 5 },
                "data": { "a": 1 }, "parentSchema": { "type": "object", "minProperties": 5 },
                "schemaPath": "#/minProperties"
            })),
            "The root value should have 5 or more properties but it has 1."
        );
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "maxProperties", "params": { "limit": 2 },
                "data": { "a": 1, "b": 2, "c": 3 },
                "parentSchema": { "type": "object", "maxProperties": 2 },
                "schemaPath": "#/maxProperties"
            })),
            "The root value should have 2 or fewer properties but it has 3."
        );
    }

    #[test]
    fn test_dependency_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "dependencies",
                "params": { "property": "a", "missingProperty": "c", "depsCount": 2, "deps": "b, c" },
                "data": { "a": 1 },
                "parentSchema": { "type": "object", "dependencies": { "a": ["b", "c"] } },
                "schemaPath": "#/dependencies"
            })),
            "The root value should have property c when a is present."
        );
    }
}

#[cfg(test)]
mod arrays {
    use super::*;

    #[test]
    fn test_items_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "/nums/1", "keyword": "enum", "params": { "allowedValues": ["a"] },
                "data": "x", "parentSchema": { "enum": ["a"] },
                "schemaPath": "#/properties/nums/items/enum"
            })),
            "The value at /nums/1 should be one of: \"a\"."
        );
    }

    #[test]
    fn test_length_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "minItems", "params": { "limit": 1 },
                "data": [], "parentSchema": { "type": "array", "minItems": 1 },
                "schemaPath": "#/minItems"
            })),
            "The root value should have 1 or more items but it has 0."
        );
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "maxItems", "params": { "limit": 1 },
                "data": [0, 1, 2], "parentSchema": { "type": "array", "maxItems": 1 },
                "schemaPath": "#/maxItems"
            })),
            "The root value should have 1 or fewer items but it has 3."
        );
    }

    #[test]
    fn test_unique_items_errors() {
        assert_eq!(
            message(json!({
                "dataPath": "", "keyword": "uniqueItems", "params": { "i": 4, "j": 1 },
                "data": [0, 1, 2, 0, 1], "parentSchema": { "type": "array", "uniqueItems": true },
                "schemaPath": "#/uniqueItems"
            })),
            "The root value should be unique but elements 1 and 4 are the same."
        );
    }
}

#[cfg(test)]
mod json_output {
    use super::*;

    fn unique_items() -> Value {
        json!({
            "data": [0, 1, 2, 0, 1],
            "dataPath": "/arr",
            "keyword": "uniqueItems",
            "message": "should NOT have duplicate items (items ## 1 and 4 are identical)",
            "params": { "i": 4, "j": 1 },
            "parentSchema": { "type": "array", "uniqueItems": true },
            "schema": true,
            "schemaPath": "#/properties/arr/uniqueItems"
        })
    }

    #[test]
    fn test_single_error_json() {
        let err = FormattedError::from_raw(&record(unique_items()), &FormatOptions::default()).unwrap();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "message": "The value at /arr should be unique but elements 1 and 4 are the same.",
                "path": "$.arr",
                "pointer": "/arr"
            })
        );
    }

    #[test]
    fn test_single_error_json_with_extras() {
        let options = FormatOptions::new().with_original_error().with_data();
        let err = FormattedError::from_raw(&record(unique_items()), &options).unwrap();
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({
                "data": [0, 1, 2, 0, 1],
                "message": "The value at /arr should be unique but elements 1 and 4 are the same.",
                "original": unique_items(),
                "path": "$.arr",
                "pointer": "/arr"
            })
        );
    }

    #[test]
    fn test_error_message_override() {
        let raw = json!({
            "dataPath": "", "keyword": "type", "params": { "type": "string" },
            "data": {}, "parentSchema": { "type": "string", "errorMessage": "should be a fancy string" },
            "schemaPath": "#/type"
        });

        assert_eq!(message(raw.clone()), "The root value should be a fancy string.");
        assert_eq!(
            message_with(raw, FormatOptions::new().with_field_labels(FieldLabels::JsonPath)),
            "The value at $ should be a fancy string."
        );
    }
}

#[cfg(test)]
mod aggregate {
    use super::*;

    fn null_fields(a_schema: Value) -> Vec<RawValidationError> {
        vec![
            record(json!({
                "dataPath": "/a", "keyword": "type", "params": { "type": "string" },
                "data": null, "parentSchema": a_schema, "schemaPath": "#/properties/a/type"
            })),
            record(json!({
                "dataPath": "/b", "keyword": "type", "params": { "type": "number" },
                "data": null, "parentSchema": { "type": "number" }, "schemaPath": "#/properties/b/type"
            })),
        ]
    }

    #[test]
    fn test_aggregates_errors() {
        let errors = AggregateError::new(&null_fields(json!({ "type": "string" })), &FormatOptions::default());
        assert_eq!(
            errors.message(),
            "The value at /a should be a string but it was null. The value at /b should be a number but it was null."
        );
    }

    #[test]
    fn test_accepts_options() {
        let errors = AggregateError::new(
            &null_fields(json!({ "title": "Stringy", "type": "string" })),
            &FormatOptions::new().with_field_labels(FieldLabels::Title),
        );
        assert_eq!(
            errors.message(),
            "Stringy should be a string but it was null. The value at /b should be a number but it was null."
        );
    }

    #[test]
    fn test_iterates_in_order_without_redundant_errors() {
        let mut raw = null_fields(json!({ "type": "string" }));
        raw.insert(
            1,
            record(json!({
                "dataPath": "", "keyword": "pattern", "params": { "pattern": "^x$" },
                "data": "a", "parentSchema": { "pattern": "^x$" },
                "schemaPath": "#/propertyNames/pattern"
            })),
        );

        let errors = AggregateError::new(&raw, &FormatOptions::default());
        let messages: Vec<&str> = errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "The value at /a should be a string but it was null.",
                "The value at /b should be a number but it was null.",
            ]
        );
        assert_eq!(errors.iter().count(), 2);
    }

    #[test]
    fn test_json_array() {
        let errors = AggregateError::new(&null_fields(json!({ "type": "string" })), &FormatOptions::default());
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            json!([
                {
                    "path": "$.a",
                    "pointer": "/a",
                    "message": "The value at /a should be a string but it was null."
                },
                {
                    "path": "$.b",
                    "pointer": "/b",
                    "message": "The value at /b should be a number but it was null."
                }
            ])
        );
    }
}
