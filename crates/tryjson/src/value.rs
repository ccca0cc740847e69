//! The closed JSON value type.

use indexmap::IndexMap;

/// Object payload. Equality ignores key order.
pub type Object = IndexMap<String, Value>;

/// A JSON value.
///
/// Exactly six variants. Values are never mutated in place: every decode,
/// encode or navigation step either borrows or builds a new value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// String-keyed mapping, keys unique.
    Object(Object),
    /// Ordered sequence.
    Array(Vec<Value>),
    /// Double-precision number. Integers up to 2^53 are carried exactly.
    Number(f64),
    String(String),
    Boolean(bool),
    #[default]
    Null,
}

/// Variant tag of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Object,
    Array,
    Number,
    String,
    Boolean,
    Null,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Build an object from key/value pairs. A repeated key keeps the last value.
    ///
    /// # Example
    ///
    /// ```
    /// use tryjson::Value;
    ///
    /// let v = Value::object([("a", Value::integer(1)), ("b", Value::integer(2))]);
    /// assert_eq!(v.key("b").unwrap(), &Value::Number(2.0));
    /// ```
    pub fn object<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build an array from a sequence of values.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(items.into_iter().collect())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Value::String(text.into())
    }

    /// Integer number. Magnitudes above 2^53 lose precision.
    pub fn integer(n: i64) -> Self {
        Value::Number(n as f64)
    }

    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    pub fn null() -> Self {
        Value::Null
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Object(_) => ValueKind::Object,
            Value::Array(_) => ValueKind::Array,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_build_expected_variants() {
        assert_eq!(Value::string("hoge"), Value::String("hoge".to_string()));
        assert_eq!(Value::integer(1), Value::Number(1.0));
        assert_eq!(Value::number(1.5), Value::Number(1.5));
        assert_eq!(Value::boolean(true), Value::Boolean(true));
        assert_eq!(Value::null(), Value::Null);
        assert_eq!(
            Value::array([Value::integer(2), Value::integer(3)]),
            Value::Array(vec![Value::Number(2.0), Value::Number(3.0)])
        );
    }

    #[test]
    fn test_object_last_duplicate_wins() {
        let v = Value::object([("a", Value::integer(1)), ("a", Value::integer(2))]);
        let map = v.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], Value::Number(2.0));
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = Value::object([("a", Value::integer(1)), ("b", Value::integer(2))]);
        let b = Value::object([("b", Value::integer(2)), ("a", Value::integer(1))]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_is_null() {
        assert!(Value::null().is_null());
        assert!(Value::default().is_null());
        assert!(!Value::boolean(false).is_null());
        assert!(!Value::array([]).is_null());
    }

    #[test]
    fn test_kind_and_views() {
        let v = Value::from("x");
        assert_eq!(v.kind(), ValueKind::String);
        assert_eq!(v.as_str(), Some("x"));
        assert_eq!(v.as_f64(), None);
        assert_eq!(Value::from(3).as_f64(), Some(3.0));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(ValueKind::Object.to_string(), "object");
    }
}
