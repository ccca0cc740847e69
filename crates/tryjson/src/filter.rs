use std::fmt::Debug;

use crate::error::{JsonError, Result};

/// Keep `value` if `predicate` accepts it, otherwise fail with
/// `JsonError::Filtered` describing the value.
///
/// Meant for post-decode checks such as ranges:
///
/// ```
/// use tryjson::{filter, JsonError, Value};
///
/// let width: i64 = filter(Value::integer(50).take()?, |w: &i64| *w > 0)?;
/// assert_eq!(width, 50);
/// assert!(matches!(filter(-1, |x| *x > 0), Err(JsonError::Filtered(_))));
/// # Ok::<(), JsonError>(())
/// ```
pub fn filter<T, F>(value: T, predicate: F) -> Result<T>
where
    T: Debug,
    F: FnOnce(&T) -> bool,
{
    if predicate(&value) {
        return Ok(value);
    }
    Err(JsonError::Filtered(format!("{value:?}")))
}
