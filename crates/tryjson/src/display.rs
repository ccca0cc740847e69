//! Textual description of a [`Value`].
//!
//! Output looks like compact JSON but never fails: non-finite numbers are
//! written as `NaN`, `inf` and `-inf`. Error contexts are built from it. Use
//! [`render`](crate::render) for real JSON output.

use std::fmt::{self, Write};

use crate::value::Value;

/// Largest magnitude at which every integer is exactly representable in `f64`.
pub(crate) const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

pub(crate) fn is_safe_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER
}

// Plain notation would spell out every digit of very large or very small
// magnitudes.
fn use_exponent(n: f64) -> bool {
    let abs = n.abs();
    n.is_finite() && (abs >= 1e16 || (abs != 0.0 && abs < 1e-6))
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Object(map) => {
                f.write_char('{')?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    write_escaped(f, key)?;
                    f.write_char(':')?;
                    fmt::Display::fmt(value, f)?;
                }
                f.write_char('}')
            }
            Value::Array(items) => {
                f.write_char('[')?;
                for (i, value) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    fmt::Display::fmt(value, f)?;
                }
                f.write_char(']')
            }
            Value::Number(n) if is_safe_integer(*n) => write!(f, "{}", *n as i64),
            Value::Number(n) if use_exponent(*n) => write!(f, "{n:e}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write_escaped(f, s),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::integer(42).to_string(), "42");
        assert_eq!(Value::number(-0.5).to_string(), "-0.5");
        assert_eq!(Value::number(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::number(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::boolean(false).to_string(), "false");
        assert_eq!(Value::null().to_string(), "null");
    }

    #[test]
    fn test_display_escapes_strings() {
        assert_eq!(Value::string("say \"hi\"").to_string(), r#""say \"hi\"""#);
        assert_eq!(Value::string("a\nb").to_string(), r#""a\nb""#);
        assert_eq!(Value::string("\u{1}").to_string(), r#""\u0001""#);
    }

    #[test]
    fn test_display_containers() {
        let v = Value::object([
            ("a", Value::array([Value::integer(1), Value::null()])),
            ("b", Value::string("x")),
        ]);
        assert_eq!(v.to_string(), r#"{"a":[1,null],"b":"x"}"#);
    }

    #[test]
    fn test_display_extreme_magnitudes_use_exponent() {
        assert_eq!(Value::number(1e300).to_string(), "1e300");
        assert_eq!(Value::number(-1e300).to_string(), "-1e300");
        assert_eq!(Value::number(2.5e-8).to_string(), "2.5e-8");
        assert_eq!(Value::number(MAX_SAFE_INTEGER * 4.0).to_string(), "3.602879701896397e16");
        assert_eq!(Value::number(f64::NEG_INFINITY).to_string(), "-inf");
        assert_eq!(Value::number(0.5).to_string(), "0.5");
        assert_eq!(Value::number(123.25).to_string(), "123.25");
        assert_eq!(Value::number(0.0).to_string(), "0");
    }

    #[test]
    fn test_safe_integer_bounds() {
        assert!(is_safe_integer(MAX_SAFE_INTEGER));
        assert!(!is_safe_integer(MAX_SAFE_INTEGER * 2.0));
        assert!(!is_safe_integer(0.1));
    }
}
