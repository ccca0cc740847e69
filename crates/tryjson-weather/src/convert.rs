//! Text converters plugged into field extraction via
//! [`Value::keyed_take_with`](tryjson::Value::keyed_take_with).

use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tryjson::{JsonError, Value};
use url::Url;

/// Parse `2015-08-12T17:00:00+0900`, or a bare `2015-08-13` taken as
/// midnight UTC.
pub fn to_date(text: String) -> Result<OffsetDateTime, JsonError> {
    let timestamp = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );
    let day = format_description!("[year]-[month]-[day]");

    if let Ok(at) = OffsetDateTime::parse(&text, timestamp) {
        return Ok(at);
    }
    Date::parse(&text, day)
        .map(|d| d.midnight().assume_utc())
        .map_err(|e| JsonError::Other(format!("to_date(), string = {text}, {e}")))
}

/// Inverse of [`to_date`] for the full timestamp form. Years outside
/// `0..=9999` have no textual form and encode as `null`.
pub fn from_date(at: &OffsetDateTime) -> Value {
    let timestamp = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory][offset_minute]"
    );
    at.format(timestamp).map_or(Value::Null, Value::String)
}

pub fn to_url(text: String) -> Result<Url, JsonError> {
    Url::parse(&text).map_err(|_| JsonError::Other(format!("to_url(), string = {text}")))
}

/// Decimal text such as `"32"` or `" 89.6"` to `f64`.
pub fn to_double(text: String) -> Result<f64, JsonError> {
    text.trim()
        .parse()
        .map_err(|_| JsonError::Other(format!("to_double(), string = {text}")))
}
