//! Key and pointer navigation into [`Value`]s.
//!
//! Pointers follow [RFC 6901](https://tools.ietf.org/html/rfc6901): a pointer
//! string is `/`-separated, with `~1` standing for `/` and `~0` for `~`.

use crate::error::{JsonError, Result};
use crate::value::Value;

impl Value {
    /// Look up `name` in an object.
    ///
    /// # Errors
    ///
    /// - `JsonError::InvalidKey` if `self` is an object without `name`
    /// - `JsonError::InvalidType` if `self` is not an object
    ///
    /// # Example
    ///
    /// ```
    /// use tryjson::{JsonError, Value};
    ///
    /// let v = Value::object([("city", Value::string("Tokyo"))]);
    /// assert_eq!(v.key("city").unwrap(), &Value::string("Tokyo"));
    /// assert!(matches!(v.key("area"), Err(JsonError::InvalidKey(_))));
    /// assert!(matches!(Value::null().key("city"), Err(JsonError::InvalidType(_))));
    /// ```
    pub fn key(&self, name: &str) -> Result<&Value> {
        match self {
            Value::Object(map) => map
                .get(name)
                .ok_or_else(|| JsonError::InvalidKey(format!("key({name:?}), self => {self}"))),
            _ => Err(JsonError::InvalidType(format!(
                "key({name:?}), self => {self}"
            ))),
        }
    }

    /// Total variant of [`Value::key`]: any failure is `None`.
    pub fn key_or_nil(&self, name: &str) -> Option<&Value> {
        self.key(name).ok()
    }

    /// Walk a sequence of steps.
    ///
    /// Object steps behave like [`Value::key`]. Array steps must be canonical
    /// non-negative indices (`"0"`, `"12"`, no leading zeros). The empty path
    /// returns `self`.
    ///
    /// # Errors
    ///
    /// - `JsonError::InvalidKey` for a missing object key, a malformed array
    ///   index or an index past the end
    /// - `JsonError::InvalidType` when a step lands on a scalar
    pub fn at(&self, path: &[String]) -> Result<&Value> {
        let mut current = self;
        for step in path {
            current = match current {
                Value::Object(_) => current.key(step)?,
                Value::Array(arr) => {
                    let idx = parse_index(step).ok_or_else(|| {
                        JsonError::InvalidKey(format!("index({step:?}), self => {current}"))
                    })?;
                    arr.get(idx).ok_or_else(|| {
                        JsonError::InvalidKey(format!("index({idx}), self => {current}"))
                    })?
                }
                _ => {
                    return Err(JsonError::InvalidType(format!(
                        "step({step:?}), self => {current}"
                    )))
                }
            };
        }
        Ok(current)
    }

    /// Walk a pointer string such as `/forecasts/0/telop`.
    ///
    /// # Example
    ///
    /// ```
    /// use tryjson::Value;
    ///
    /// let v = Value::object([(
    ///     "forecasts",
    ///     Value::array([Value::object([("telop", Value::string("Sunny"))])]),
    /// )]);
    /// assert_eq!(v.pointer("/forecasts/0/telop").unwrap(), &Value::string("Sunny"));
    /// assert_eq!(v.pointer("").unwrap(), &v);
    /// ```
    pub fn pointer(&self, pointer: &str) -> Result<&Value> {
        self.at(&parse_pointer(pointer))
    }

    /// Total variant of [`Value::pointer`].
    pub fn pointer_or_nil(&self, pointer: &str) -> Option<&Value> {
        self.pointer(pointer).ok()
    }
}

// `~1` is `/` and `~0` is `~`. A lone or unknown `~` escape is kept as is.
fn unescape_step(step: &str) -> String {
    let mut out = String::with_capacity(step.len());
    let mut chars = step.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, chars.peek()) {
            ('~', Some('0')) => {
                out.push('~');
                chars.next();
            }
            ('~', Some('1')) => {
                out.push('/');
                chars.next();
            }
            _ => out.push(ch),
        }
    }
    out
}

fn push_escaped_step(out: &mut String, step: &str) {
    for ch in step.chars() {
        match ch {
            '~' => out.push_str("~0"),
            '/' => out.push_str("~1"),
            _ => out.push(ch),
        }
    }
}

/// Split a pointer string into unescaped steps.
///
/// The empty string is the root. A missing leading `/` is tolerated.
///
/// ```
/// use tryjson::parse_pointer;
///
/// assert_eq!(parse_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_pointer("/"), vec![""]);
/// assert_eq!(parse_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// assert_eq!(parse_pointer("foo/bar"), vec!["foo", "bar"]);
/// ```
pub fn parse_pointer(pointer: &str) -> Vec<String> {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_step).collect()
}

/// Join steps into a pointer string. The root is the empty string.
pub fn format_pointer(path: &[String]) -> String {
    let mut out = String::new();
    for component in path {
        out.push('/');
        push_escaped_step(&mut out, component);
    }
    out
}

fn parse_index(step: &str) -> Option<usize> {
    let bytes = step.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    step.parse().ok()
}
