//! Weather forecast response decoded with `tryjson`.
//!
//! # Example
//!
//! ```
//! use tryjson_weather::WeatherLocation;
//!
//! let doc = r#"{"city": "久留米", "area": "九州", "prefecture": "福岡県"}"#.as_bytes();
//! let location: WeatherLocation = tryjson::from_slice(doc).unwrap();
//! assert_eq!(location.prefecture, "福岡県");
//! ```

pub mod convert;
pub mod model;

use std::path::Path;

pub use model::{
    WeatherCopyright, WeatherDescription, WeatherForecast, WeatherImage, WeatherLocation,
    WeatherPinpointLocation, WeatherResponse, WeatherTemperature, WeatherTemperatureRange,
};

/// Read, parse and decode a response file.
///
/// Returns the pretty-printed response, or the description of whichever
/// stage failed first. Never panics on bad input.
pub fn report(path: &Path) -> String {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read input");
            return format!("{}: {e}", path.display());
        }
    };
    match tryjson::from_slice::<WeatherResponse>(&bytes) {
        Ok(response) => format!("{response:#?}"),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "decode failed");
            e.to_string()
        }
    }
}
