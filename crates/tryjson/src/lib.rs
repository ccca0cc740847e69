//! Closed JSON value model with type-directed decoding and encoding.
//!
//! A [`Value`] has exactly six variants. [`Decodable`] and [`Encodable`]
//! convert between it and Rust types; [`parse`] and [`render`] convert
//! between it and JSON text.
//!
//! # Example
//!
//! ```
//! use tryjson::{parse, render_string, Decodable, JsonError, Value};
//!
//! #[derive(Debug)]
//! struct Image {
//!     title: String,
//!     width: i64,
//!     height: i64,
//! }
//!
//! impl Decodable for Image {
//!     fn decode(json: &Value) -> Result<Self, JsonError> {
//!         Ok(Image {
//!             title: json.keyed_take("title")?,
//!             width: json.keyed_take("width")?,
//!             height: json.keyed_take("height")?,
//!         })
//!     }
//! }
//!
//! let doc = parse(br#"{"title": "sunny", "width": 50, "height": 31}"#).unwrap();
//! let image: Image = doc.take().unwrap();
//! assert_eq!(image.width, 50);
//!
//! // A missing field reports the first one that fails.
//! let doc = parse(br#"{"title": "sunny"}"#).unwrap();
//! assert!(matches!(doc.take::<Image>(), Err(JsonError::InvalidKey(_))));
//!
//! assert_eq!(render_string(&Value::array([Value::integer(1)])), "[1]");
//! ```

mod bridge;
mod decode;
mod display;
mod encode;
mod error;
mod filter;
mod navigate;
mod value;

pub use bridge::{
    from_slice, from_str, is_valid_json_object, parse, render, render_pretty, render_string,
    to_string, to_vec,
};
pub use decode::Decodable;
pub use encode::Encodable;
pub use error::{JsonError, Result};
pub use filter::filter;
pub use navigate::{format_pointer, parse_pointer};
pub use value::{Object, Value, ValueKind};
