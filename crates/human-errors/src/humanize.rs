//! String humanization helpers used to assemble error sentences
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive English pluralization: anything other than exactly one gets an "s".
pub fn pluralize(word: &str, n: u64) -> String {
    if n == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Pick "a" or "an" for the given word.
pub fn indefinite_article(word: &str) -> &'static str {
    match word.chars().next().map(|c| c.to_ascii_lowercase()) {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Join items the way a sentence would: "a", "a or b", "a, b, and c".
pub fn humanize_list<S: AsRef<str>>(items: &[S], conjunction: &str) -> String {
    match items {
        [] => "nothing".to_string(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {} {}", first.as_ref(), conjunction, second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, {} {}", head.join(", "), conjunction, last.as_ref())
        }
    }
}

/// Describe the runtime type of a value, e.g. "an array" or "a number".
///
/// `None` stands for a value the validator did not report and renders as
/// "undefined".
pub fn humanize_type_of(value: Option<&Value>) -> String {
    let name = match value {
        None => return "undefined".to_string(),
        Some(Value::Null) => return "null".to_string(),
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    };
    format!("{} {}", indefinite_article(name), name)
}

/// Render a schema parameter for inclusion in a sentence.
///
/// Numbers print the way JavaScript prints them: a limit declared as `10.0`
/// reads "10" and `1e300` reads "1e+300". Strings print bare; everything
/// else prints as JSON.
pub fn humanize_value(value: &Value) -> String {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => js_number(f),
                    _ => n.to_string(),
                }
            }
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decimal below 1e21 and above 1e-6, exponent form outside that range
fn js_number(f: f64) -> String {
    let magnitude = f.abs();
    if f == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", f);
        match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => text,
        }
    } else if f.fract() == 0.0 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}
