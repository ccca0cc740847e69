//! Response types for the livedoor weather forecast API.

use time::OffsetDateTime;
use tryjson::{Decodable, Encodable, JsonError, Value};
use url::Url;

use crate::convert::{from_date, to_date, to_double, to_url};

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherPinpointLocation {
    pub link: Url,
    pub name: String,
}

impl Decodable for WeatherPinpointLocation {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherPinpointLocation {
            link: json.keyed_take_with("link", to_url)?,
            name: json.keyed_take("name")?,
        })
    }
}

impl Encodable for WeatherPinpointLocation {
    fn encode(&self) -> Value {
        Value::object([
            ("link", self.link.as_str().encode()),
            ("name", self.name.encode()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherLocation {
    pub city: String,
    pub area: String,
    pub prefecture: String,
}

impl Decodable for WeatherLocation {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherLocation {
            city: json.keyed_take("city")?,
            area: json.keyed_take("area")?,
            prefecture: json.keyed_take("prefecture")?,
        })
    }
}

impl Encodable for WeatherLocation {
    fn encode(&self) -> Value {
        Value::object([
            ("city", self.city.encode()),
            ("area", self.area.encode()),
            ("prefecture", self.prefecture.encode()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDescription {
    pub text: String,
    pub public_time: OffsetDateTime,
}

impl Decodable for WeatherDescription {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherDescription {
            text: json.keyed_take("text")?,
            public_time: json.keyed_take_with("publicTime", to_date)?,
        })
    }
}

impl Encodable for WeatherDescription {
    fn encode(&self) -> Value {
        Value::object([
            ("text", self.text.encode()),
            ("publicTime", from_date(&self.public_time)),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherImage {
    pub title: String,
    pub url: Url,
    pub width: i64,
    pub height: i64,
}

impl Decodable for WeatherImage {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherImage {
            title: json.keyed_take("title")?,
            url: json.keyed_take_with("url", to_url)?,
            width: json.keyed_take("width")?,
            height: json.keyed_take("height")?,
        })
    }
}

impl Encodable for WeatherImage {
    fn encode(&self) -> Value {
        Value::object([
            ("title", self.title.encode()),
            ("url", self.url.as_str().encode()),
            ("width", self.width.encode()),
            ("height", self.height.encode()),
        ])
    }
}

/// Temperatures arrive as decimal strings, e.g. `{"celsius": "32"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTemperature {
    pub celsius: f64,
    pub fahrenheit: f64,
}

impl Decodable for WeatherTemperature {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherTemperature {
            celsius: json.keyed_take_with("celsius", to_double)?,
            fahrenheit: json.keyed_take_with("fahrenheit", to_double)?,
        })
    }
}

impl Encodable for WeatherTemperature {
    fn encode(&self) -> Value {
        Value::object([
            ("celsius", Value::string(self.celsius.to_string())),
            ("fahrenheit", Value::string(self.fahrenheit.to_string())),
        ])
    }
}

/// Either bound may be `null` (today's minimum is never published). The keys
/// themselves are required.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherTemperatureRange {
    pub min: Option<WeatherTemperature>,
    pub max: Option<WeatherTemperature>,
}

impl Decodable for WeatherTemperatureRange {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherTemperatureRange {
            min: json.key("min")?.take_or_nil(),
            max: json.key("max")?.take_or_nil(),
        })
    }
}

impl Encodable for WeatherTemperatureRange {
    fn encode(&self) -> Value {
        Value::object([("min", self.min.encode()), ("max", self.max.encode())])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherForecast {
    pub date: OffsetDateTime,
    pub date_label: String,
    pub telop: String,
    pub temperature: WeatherTemperatureRange,
    pub image: WeatherImage,
}

impl Decodable for WeatherForecast {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherForecast {
            date: json.keyed_take_with("date", to_date)?,
            date_label: json.keyed_take("dateLabel")?,
            telop: json.keyed_take("telop")?,
            temperature: json.keyed_take("temperature")?,
            image: json.keyed_take("image")?,
        })
    }
}

impl Encodable for WeatherForecast {
    fn encode(&self) -> Value {
        Value::object([
            ("date", from_date(&self.date)),
            ("dateLabel", self.date_label.encode()),
            ("telop", self.telop.encode()),
            ("temperature", self.temperature.encode()),
            ("image", self.image.encode()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCopyright {
    pub title: String,
    pub link: Url,
    pub image: WeatherImage,
    /// Kept undecoded; the provider list has no fixed shape.
    pub provider: Vec<Value>,
}

impl Decodable for WeatherCopyright {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherCopyright {
            title: json.keyed_take("title")?,
            link: json.keyed_take_with("link", to_url)?,
            image: json.keyed_take("image")?,
            provider: json.keyed_take("provider")?,
        })
    }
}

impl Encodable for WeatherCopyright {
    fn encode(&self) -> Value {
        Value::object([
            ("title", self.title.encode()),
            ("link", self.link.as_str().encode()),
            ("image", self.image.encode()),
            ("provider", self.provider.encode()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherResponse {
    pub location: WeatherLocation,
    pub title: String,
    pub link: String,
    pub public_time: OffsetDateTime,
    pub description: WeatherDescription,
    pub forecasts: Vec<WeatherForecast>,
    pub pinpoint_locations: Vec<WeatherPinpointLocation>,
    pub copyright: WeatherCopyright,
}

impl Decodable for WeatherResponse {
    fn decode(json: &Value) -> Result<Self, JsonError> {
        Ok(WeatherResponse {
            location: json.keyed_take("location")?,
            title: json.keyed_take("title")?,
            link: json.keyed_take("link")?,
            public_time: json.keyed_take_with("publicTime", to_date)?,
            description: json.keyed_take("description")?,
            forecasts: json.keyed_take("forecasts")?,
            pinpoint_locations: json.keyed_take("pinpointLocations")?,
            copyright: json.keyed_take("copyright")?,
        })
    }
}

impl Encodable for WeatherResponse {
    fn encode(&self) -> Value {
        Value::object([
            ("location", self.location.encode()),
            ("title", self.title.encode()),
            ("link", self.link.encode()),
            ("publicTime", from_date(&self.public_time)),
            ("description", self.description.encode()),
            ("forecasts", self.forecasts.encode()),
            ("pinpointLocations", self.pinpoint_locations.encode()),
            ("copyright", self.copyright.encode()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_json() -> Value {
        Value::object([
            ("title", Value::string("晴れ")),
            ("url", Value::string("http://weather.livedoor.com/img/icon/1.gif")),
            ("width", Value::integer(50)),
            ("height", Value::integer(31)),
        ])
    }

    #[test]
    fn test_image_decode_and_encode() {
        let image: WeatherImage = image_json().take().unwrap();
        assert_eq!(image.width, 50);
        assert_eq!(image.url.path(), "/img/icon/1.gif");
        assert_eq!(image.encode(), image_json());
    }

    #[test]
    fn test_image_bad_url_is_other() {
        let json = Value::object([
            ("title", Value::string("晴れ")),
            ("url", Value::string("::::")),
            ("width", Value::string("wide")),
            ("height", Value::integer(31)),
        ]);
        // `url` precedes `width`, so its error wins.
        assert!(matches!(json.take::<WeatherImage>(), Err(JsonError::Other(_))));
    }

    #[test]
    fn test_temperature_range_with_null_min() {
        let json = Value::object([
            ("min", Value::null()),
            (
                "max",
                Value::object([
                    ("celsius", Value::string("32")),
                    ("fahrenheit", Value::string("89.6")),
                ]),
            ),
        ]);
        let range: WeatherTemperatureRange = json.take().unwrap();
        assert_eq!(range.min, None);
        assert_eq!(
            range.max,
            Some(WeatherTemperature {
                celsius: 32.0,
                fahrenheit: 89.6,
            })
        );
        assert_eq!(range.encode(), json);
    }
}
