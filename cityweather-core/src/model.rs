use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

/// Raw city name as typed by the user.
///
/// No trimming or validation happens here; an empty query is still a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replace the current text, as an input field does on each keystroke.
    pub fn set(&mut self, raw: impl Into<String>) {
        self.0 = raw.into();
    }
}

impl From<String> for CityQuery {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CityQuery {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current-weather body as returned by the provider.
///
/// Every field is optional: the shape is expected but not enforced, and a
/// missing value simply renders as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherRecord {
    pub name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sys: Sys,
    #[serde(deserialize_with = "null_as_default")]
    pub main: Readings,
    #[serde(deserialize_with = "null_as_default")]
    pub weather: Vec<Condition>,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: Wind,
}

/// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sys {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

/// Temperature is in Kelvin: no `units` parameter is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Readings {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Condition {
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wind {
    pub speed: Option<f64>,
}

impl WeatherRecord {
    /// Parse a provider body. Anything but a JSON object is rejected, since
    /// derived struct deserialization would also accept an array.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<serde_json::Value>(body)? {
            value @ serde_json::Value::Object(_) => serde_json::from_value(value),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn city(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.sys.country.as_deref()
    }

    /// First condition entry; the provider lists the dominant one first.
    pub fn primary_condition(&self) -> Option<&Condition> {
        self.weather.first()
    }

    pub fn icon_code(&self) -> Option<&str> {
        self.primary_condition().and_then(|c| c.icon.as_deref())
    }

    pub fn description(&self) -> Option<&str> {
        self.primary_condition().and_then(|c| c.description.as_deref())
    }

    pub fn sunrise(&self) -> Option<DateTime<Utc>> {
        self.sys.sunrise.and_then(unix_to_utc)
    }

    pub fn sunset(&self) -> Option<DateTime<Utc>> {
        self.sys.sunset.and_then(unix_to_utc)
    }

    pub fn temp_celsius(&self) -> Option<f64> {
        self.main.temp.map(|k| k - 273.15)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(ts, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_provider_body() {
        let body = r#"{
            "coord": {"lon": -0.13, "lat": 51.51},
            "weather": [{"id": 300, "main": "Drizzle", "description": "light intensity drizzle", "icon": "09d"}],
            "main": {"temp": 280.32, "pressure": 1012, "humidity": 81},
            "wind": {"speed": 4.1, "deg": 80},
            "sys": {"country": "GB", "sunrise": 1485762037, "sunset": 1485794875},
            "name": "London",
            "cod": 200
        }"#;

        let record = WeatherRecord::from_json(body).expect("valid body");

        assert_eq!(record.city(), Some("London"));
        assert_eq!(record.country(), Some("GB"));
        assert_eq!(record.icon_code(), Some("09d"));
        assert_eq!(record.description(), Some("light intensity drizzle"));
        assert_eq!(record.main.pressure, Some(1012.0));
        assert_eq!(record.main.humidity, Some(81.0));
        assert_eq!(record.wind.speed, Some(4.1));
        assert_eq!(record.sunrise().map(|t| t.timestamp()), Some(1485762037));
    }

    #[test]
    fn missing_fields_are_absent_not_errors() {
        let record = WeatherRecord::from_json(r#"{"name": "Oslo"}"#).unwrap();

        assert_eq!(record.city(), Some("Oslo"));
        assert_eq!(record.country(), None);
        assert_eq!(record.icon_code(), None);
        assert_eq!(record.temp_celsius(), None);
        assert_eq!(record.sunset(), None);
    }

    #[test]
    fn non_object_body_is_rejected() {
        for body in ["[]", r#"["Oslo"]"#, "", "null", "42", r#""London""#] {
            assert!(WeatherRecord::from_json(body).is_err(), "body {body:?}");
        }
    }

    #[test]
    fn array_error_names_the_shape() {
        let err = WeatherRecord::from_json(r#"["Oslo"]"#).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found an array"));
    }

    #[test]
    fn explicit_nulls_read_as_missing() {
        let body = r#"{"name": "Oslo", "sys": null, "main": null, "weather": null, "wind": null}"#;
        let record = WeatherRecord::from_json(body).expect("nulls are tolerated");

        assert_eq!(record.city(), Some("Oslo"));
        assert_eq!(record.country(), None);
        assert_eq!(record.icon_code(), None);
        assert_eq!(record.temp_celsius(), None);
        assert_eq!(record.wind.speed, None);
    }

    #[test]
    fn city_query_keeps_raw_text() {
        let mut q = CityQuery::from("  New York ");
        assert_eq!(q.as_str(), "  New York ");

        q.set("");
        assert_eq!(q.as_str(), "");
    }

    #[test]
    fn kelvin_converts_to_celsius() {
        let record = WeatherRecord {
            main: Readings { temp: Some(273.15), ..Default::default() },
            ..Default::default()
        };
        assert_eq!(record.temp_celsius(), Some(0.0));
    }
}
