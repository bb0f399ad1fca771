//! Lenient field access over raw JSON records.
//!
//! Every accessor is total: a missing key, a `null`, or a value of the wrong
//! JSON type all read as "absent". Nothing here returns an error.

use serde_json::Value;

/// Follows a chain of object keys; `None` as soon as a step is missing.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// A string at `keys`, ignoring non-string values.
pub fn str_at<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    path(value, keys)?.as_str()
}

/// The array at `keys`, or an empty slice for anything that is not an array.
pub fn array_at<'a>(value: &'a Value, keys: &[&str]) -> &'a [Value] {
    path(value, keys)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// A boolean at `keys`; only a literal `true` counts.
pub fn flag_at(value: &Value, keys: &[&str]) -> bool {
    path(value, keys).and_then(Value::as_bool).unwrap_or(false)
}

/// JavaScript-style truthiness, used for checkbox values.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Concatenates the `plain_text` of every span in a span array.
///
/// Spans without a string `plain_text` contribute nothing.
pub fn joined_plain_text(spans: &[Value]) -> String {
    spans
        .iter()
        .filter_map(|span| str_at(span, &["plain_text"]))
        .collect()
}
