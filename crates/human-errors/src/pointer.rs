//! JSON Pointer to JSON Path conversion
//!
//! Validators locate failing values with RFC 6901 pointers (`/a/b/0`); people
//! read dotted paths (`$.a.b[0]`) more easily.
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

/// Split a pointer into its unescaped reference tokens.
///
/// The empty pointer addresses the whole document and yields no tokens.
pub fn segments(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }

    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(unescape_segment)
        .collect()
}

/// Undo `~1` and `~0` escapes, in that order.
pub fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// Convert a JSON Pointer into JSON Path notation.
///
/// Literal dots are escaped as `\.` and all-digit tokens become array
/// indices.
pub fn json_pointer_to_json_path(pointer: &str) -> String {
    let mut path = String::from("$");

    for segment in segments(pointer) {
        let escaped = segment.replace('.', "\\.");
        if !escaped.is_empty() && escaped.bytes().all(|b| b.is_ascii_digit()) {
            path.push('[');
            path.push_str(&escaped);
            path.push(']');
        } else {
            path.push('.');
            path.push_str(&escaped);
        }
    }

    path
}

/// Describe the location a pointer refers to.
pub fn humanize_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "the root value".to_string()
    } else {
        format!("the value at {}", json_pointer_to_json_path(pointer))
    }
}
