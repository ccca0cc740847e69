//! Conversion between [`Value`] and JSON text.
//!
//! Bytes are read into a `serde_json::Value` graph and folded into a
//! [`Value`]; rendering runs the fold the other way. The coupling to
//! `serde_json` is limited to the two `TryFrom` conversions below.

use std::str::FromStr;

use crate::decode::Decodable;
use crate::display::is_safe_integer;
use crate::encode::Encodable;
use crate::error::{JsonError, Result};
use crate::value::{Object, Value};

/// Deepest container nesting [`parse`] accepts, and so the deepest
/// [`render`] will produce. serde_json stops reading at 128 open containers.
const MAX_DEPTH: usize = 127;

impl TryFrom<serde_json::Value> for Value {
    type Error = JsonError;

    fn try_from(node: serde_json::Value) -> Result<Self> {
        Ok(match node {
            serde_json::Value::Null => Value::Null,
            // The graph tags booleans separately from numbers, so `true`
            // never folds into `1`.
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().ok_or(JsonError::ParseFailed)?),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| Value::try_from(v).map(|v| (k, v)))
                    .collect::<Result<Object>>()?,
            ),
        })
    }
}

impl TryFrom<&Value> for serde_json::Value {
    type Error = JsonError;

    fn try_from(value: &Value) -> Result<Self> {
        Ok(match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Number(n) if is_safe_integer(*n) => serde_json::Value::from(*n as i64),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .ok_or_else(|| {
                    JsonError::InvalidType(format!("number {n} has no JSON representation"))
                })?,
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(items) => serde_json::Value::Array(
                items
                    .iter()
                    .map(serde_json::Value::try_from)
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Object(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| serde_json::Value::try_from(v).map(|v| (k.clone(), v)))
                    .collect::<Result<serde_json::Map<_, _>>>()?,
            ),
        })
    }
}

/// Parse a complete JSON document.
///
/// Top-level scalars are accepted. Documents nesting more than 127 arrays or
/// objects are rejected. Any failure, syntax or otherwise, is reported as
/// `JsonError::ParseFailed`; the underlying detail is only logged.
///
/// # Example
///
/// ```
/// use tryjson::{parse, Value};
///
/// assert_eq!(parse(b"true").unwrap(), Value::boolean(true));
/// assert_eq!(parse(b"1").unwrap(), Value::number(1.0));
/// assert!(parse(b"[1,]").is_err());
/// ```
pub fn parse(bytes: &[u8]) -> Result<Value> {
    let graph: serde_json::Value = serde_json::from_slice(bytes).map_err(|e| {
        tracing::debug!(error = %e, len = bytes.len(), "json deserialization failed");
        JsonError::ParseFailed
    })?;
    let value = Value::try_from(graph)?;
    tracing::trace!(kind = %value.kind(), "parsed json document");
    Ok(value)
}

/// Render compact JSON.
///
/// `None` if the value has no JSON form: it holds a NaN or infinite number,
/// or nests containers deeper than [`parse`] reads back (127 levels).
pub fn render(value: &Value) -> Option<Vec<u8>> {
    let graph = to_graph(value)?;
    serde_json::to_vec(&graph)
        .map_err(|e| tracing::debug!(error = %e, "json rendering failed"))
        .ok()
}

/// Render indented JSON. `None` under the same conditions as [`render`].
pub fn render_pretty(value: &Value) -> Option<Vec<u8>> {
    let graph = to_graph(value)?;
    serde_json::to_vec_pretty(&graph)
        .map_err(|e| tracing::debug!(error = %e, "json rendering failed"))
        .ok()
}

/// Render compact JSON as text, or the empty string when rendering fails.
pub fn render_string(value: &Value) -> String {
    render(value)
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .unwrap_or_default()
}

/// Whether `value` can be written as a JSON document: the top level is an
/// object or array, every number in it is finite, and containers nest at
/// most 127 deep.
///
/// Consult this before [`render`] when a container document is required.
pub fn is_valid_json_object(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
        && !exceeds_depth(value, MAX_DEPTH)
        && serde_json::Value::try_from(value).is_ok()
}

/// [`parse`] followed by [`Value::take`].
pub fn from_slice<T: Decodable>(bytes: &[u8]) -> Result<T> {
    parse(bytes)?.take()
}

/// [`parse`] on UTF-8 text followed by [`Value::take`].
pub fn from_str<T: Decodable>(text: &str) -> Result<T> {
    from_slice(text.as_bytes())
}

/// Encode then [`render`].
pub fn to_vec<T: Encodable + ?Sized>(value: &T) -> Option<Vec<u8>> {
    render(&value.encode())
}

/// Encode then [`render`] as text.
pub fn to_string<T: Encodable + ?Sized>(value: &T) -> Option<String> {
    to_vec(value).and_then(|bytes| String::from_utf8(bytes).ok())
}

impl FromStr for Value {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s.as_bytes())
    }
}

fn to_graph(value: &Value) -> Option<serde_json::Value> {
    if exceeds_depth(value, MAX_DEPTH) {
        tracing::debug!(max_depth = MAX_DEPTH, "value nests too deep to read back");
        return None;
    }
    serde_json::Value::try_from(value)
        .map_err(|e| tracing::debug!(error = %e, "value has no json form"))
        .ok()
}

// `remaining` counts the containers still allowed at and below `value`.
fn exceeds_depth(value: &Value, remaining: usize) -> bool {
    match value {
        Value::Array(items) => {
            remaining == 0 || items.iter().any(|v| exceeds_depth(v, remaining - 1))
        }
        Value::Object(map) => {
            remaining == 0 || map.values().any(|v| exceeds_depth(v, remaining - 1))
        }
        _ => false,
    }
}
