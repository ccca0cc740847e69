//! Encoding typed Rust values into [`Value`]s.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

use crate::value::Value;

/// Types that can be turned into a [`Value`]. Encoding never fails.
pub trait Encodable {
    fn encode(&self) -> Value;
}

impl Value {
    /// Encode any [`Encodable`] into a new value.
    ///
    /// ```
    /// use tryjson::Value;
    ///
    /// let v = Value::from_encodable(&vec![2_i64, 3, 5]);
    /// assert_eq!(v, Value::array([Value::integer(2), Value::integer(3), Value::integer(5)]));
    /// ```
    pub fn from_encodable<T: Encodable + ?Sized>(value: &T) -> Value {
        value.encode()
    }
}

impl Encodable for Value {
    fn encode(&self) -> Value {
        self.clone()
    }
}

impl<T: Encodable + ?Sized> Encodable for &T {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

impl<T: Encodable + ?Sized> Encodable for Box<T> {
    fn encode(&self) -> Value {
        (**self).encode()
    }
}

// Integers widen to f64; magnitudes above 2^53 lose precision.
macro_rules! encode_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Encodable for $ty {
                fn encode(&self) -> Value {
                    Value::Number(*self as f64)
                }
            }
        )*
    };
}

encode_number!(f64, f32, i32, i64, isize, u32, u64, usize);

impl Encodable for str {
    fn encode(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl Encodable for String {
    fn encode(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Encodable for bool {
    fn encode(&self) -> Value {
        Value::Boolean(*self)
    }
}

/// `None` encodes as `null`.
impl<T: Encodable> Encodable for Option<T> {
    fn encode(&self) -> Value {
        match self {
            Some(value) => value.encode(),
            None => Value::Null,
        }
    }
}

impl<T: Encodable> Encodable for [T] {
    fn encode(&self) -> Value {
        Value::Array(self.iter().map(Encodable::encode).collect())
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self) -> Value {
        self.as_slice().encode()
    }
}

impl<T: Encodable, S: BuildHasher> Encodable for HashMap<String, T, S> {
    fn encode(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.encode())).collect())
    }
}

impl<T: Encodable> Encodable for BTreeMap<String, T> {
    fn encode(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.encode())).collect())
    }
}

impl<T: Encodable, S: BuildHasher> Encodable for IndexMap<String, T, S> {
    fn encode(&self) -> Value {
        Value::Object(self.iter().map(|(k, v)| (k.clone(), v.encode())).collect())
    }
}
