//! Nested object → URL query string.

use anyhow::{bail, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;
use std::borrow::Cow;

use crate::value::to_js_string;

// RFC 3986 unreserved plus `!'()*`
const URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a string the same way JS `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT_SET).to_string()
}

/// Flattens `source` into `key=value` pairs joined by `&`.
///
/// Nested objects and arrays use bracket notation under their parent key, so
/// `{"a": {"b": 1}}` becomes `a%5Bb%5D=1` and `{"a": ["x"]}` becomes
/// `a%5B0%5D=x`. A nested container contributes its own joined fragment in
/// place of one pair, so an empty one leaves an empty segment (`a=1&&d=2`).
/// An empty `prefix` is treated the same as none.
pub fn to_query_string(source: &Value, prefix: Option<&str>) -> Result<String> {
    match source {
        Value::Object(_) | Value::Array(_) => Ok(flatten(source, prefix.filter(|p| !p.is_empty()))),
        other => bail!(
            "Cannot build a query string from {}; expected an object or array.",
            kind_name(other)
        ),
    }
}

fn flatten(source: &Value, prefix: Option<&str>) -> String {
    let entries: Vec<(Cow<'_, str>, &Value)> = match source {
        Value::Object(map) => map.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v)).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (Cow::Owned(i.to_string()), v))
            .collect(),
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .map(|(key, value)| {
            let name = match prefix {
                Some(p) => format!("{}[{}]", p, key),
                None => key.into_owned(),
            };
            match value {
                Value::Object(_) | Value::Array(_) => flatten(value, Some(&name)),
                scalar => format!(
                    "{}={}",
                    encode_uri_component(&name),
                    encode_uri_component(&to_js_string(scalar))
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
