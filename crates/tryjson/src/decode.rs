//! Decoding [`Value`]s into typed Rust values.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::error::{JsonError, Result};
use crate::value::Value;

/// Types that can be built from a [`Value`].
///
/// User types implement this by extracting each field in declared order and
/// feeding the results to a plain struct literal. Because every extraction
/// ends in `?`, the first failing field is the error that propagates and the
/// remaining fields are never evaluated.
///
/// # Example
///
/// ```
/// use tryjson::{Decodable, JsonError, Value};
///
/// #[derive(Debug, PartialEq)]
/// struct Location {
///     city: String,
///     area: String,
/// }
///
/// impl Decodable for Location {
///     fn decode(json: &Value) -> Result<Self, JsonError> {
///         Ok(Location {
///             city: json.keyed_take("city")?,
///             area: json.keyed_take("area")?,
///         })
///     }
/// }
///
/// let v = Value::object([("city", Value::string("Kurume")), ("area", Value::string("Kyushu"))]);
/// let loc: Location = v.take().unwrap();
/// assert_eq!(loc.city, "Kurume");
/// ```
///
/// # Numbers
///
/// Every number is held as an `f64`. The built-in integer impls (`i32`,
/// `i64`, `isize`, `u32`, `u64`, `usize`) convert it with `as`, so decoding
/// is lossy and never fails on range: fractions truncate toward zero,
/// out-of-range values saturate at the target's bounds, and NaN becomes 0.
/// Check the value with [`filter`](fn@crate::filter) when a range matters.
///
/// ```
/// use tryjson::Value;
///
/// assert_eq!(Value::number(2.9).take::<i64>().unwrap(), 2);
/// assert_eq!(Value::number(-2.9).take::<i64>().unwrap(), -2);
/// assert_eq!(Value::number(-1.0).take::<u32>().unwrap(), 0);
/// assert_eq!(Value::number(1e20).take::<i32>().unwrap(), i32::MAX);
/// assert_eq!(Value::number(f64::NAN).take::<u64>().unwrap(), 0);
/// ```
pub trait Decodable: Sized {
    fn decode(json: &Value) -> Result<Self>;
}

impl Value {
    /// Decode `self` as `T`.
    ///
    /// `Vec<T>` and `HashMap<String, T>` are ordinary `Decodable` types, so
    /// the same call covers arrays and maps.
    pub fn take<T: Decodable>(&self) -> Result<T> {
        T::decode(self)
    }

    /// Like [`Value::take`], discarding the error.
    pub fn take_or_nil<T: Decodable>(&self) -> Option<T> {
        T::decode(self).ok()
    }

    /// [`Value::key`] followed by [`Value::take`].
    pub fn keyed_take<T: Decodable>(&self, name: &str) -> Result<T> {
        self.key(name)?.take()
    }

    /// Decode `self` as `S` and hand the result to a caller-supplied converter.
    ///
    /// The converter owns its failure reporting, typically through
    /// `JsonError::Other`.
    pub fn take_with<S, T, F>(&self, convert: F) -> Result<T>
    where
        S: Decodable,
        F: FnOnce(S) -> Result<T>,
    {
        convert(self.take()?)
    }

    /// [`Value::key`] followed by [`Value::take_with`].
    ///
    /// ```
    /// use tryjson::{JsonError, Value};
    ///
    /// fn to_celsius(text: String) -> Result<f64, JsonError> {
    ///     text.trim().parse().map_err(|_| JsonError::Other(format!("not a number: {text}")))
    /// }
    ///
    /// let v = Value::object([("celsius", Value::string("32"))]);
    /// assert_eq!(v.keyed_take_with("celsius", to_celsius).unwrap(), 32.0);
    /// ```
    pub fn keyed_take_with<S, T, F>(&self, name: &str, convert: F) -> Result<T>
    where
        S: Decodable,
        F: FnOnce(S) -> Result<T>,
    {
        self.key(name)?.take_with(convert)
    }
}

impl Decodable for Value {
    fn decode(json: &Value) -> Result<Self> {
        Ok(json.clone())
    }
}

fn invalid_type(target: &str, json: &Value) -> JsonError {
    JsonError::InvalidType(format!("{target} decode, json => {json}"))
}

macro_rules! decode_number {
    ($($ty:ty),* $(,)?) => {
        $(
            /// Lossy `as` conversion from the `f64` payload; see
            /// [`Decodable#numbers`].
            impl Decodable for $ty {
                fn decode(json: &Value) -> Result<Self> {
                    match json {
                        Value::Number(n) => Ok(*n as $ty),
                        _ => Err(invalid_type(stringify!($ty), json)),
                    }
                }
            }
        )*
    };
}

decode_number!(f64, f32, i32, i64, isize, u32, u64, usize);

impl Decodable for String {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::String(s) => Ok(s.clone()),
            _ => Err(invalid_type("String", json)),
        }
    }
}

impl Decodable for bool {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::Boolean(b) => Ok(*b),
            _ => Err(invalid_type("bool", json)),
        }
    }
}

/// `null` decodes to `None`; anything else must decode as `T`.
impl<T: Decodable> Decodable for Option<T> {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::Null => Ok(None),
            _ => T::decode(json).map(Some),
        }
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::Array(items) => items.iter().map(T::decode).collect(),
            _ => Err(invalid_type("Vec", json)),
        }
    }
}

impl<T: Decodable, S: BuildHasher + Default> Decodable for HashMap<String, T, S> {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| T::decode(v).map(|t| (k.clone(), t)))
                .collect(),
            _ => Err(invalid_type("HashMap", json)),
        }
    }
}

impl<T: Decodable> Decodable for BTreeMap<String, T> {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| T::decode(v).map(|t| (k.clone(), t)))
                .collect(),
            _ => Err(invalid_type("BTreeMap", json)),
        }
    }
}

impl<T: Decodable, S: BuildHasher + Default> Decodable for IndexMap<String, T, S> {
    fn decode(json: &Value) -> Result<Self> {
        match json {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| T::decode(v).map(|t| (k.clone(), t)))
                .collect(),
            _ => Err(invalid_type("IndexMap", json)),
        }
    }
}
