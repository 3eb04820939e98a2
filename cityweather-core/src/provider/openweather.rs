use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    FetchError,
    model::{CityQuery, WeatherRecord},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// OpenWeatherMap "current weather by city name" client.
///
/// Sends `q` and `appid` only. The HTTP client keeps its defaults: no timeout
/// override and no retries.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            endpoint: format!("{}{CURRENT_WEATHER_PATH}", base_url.trim_end_matches('/')),
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Error envelope OpenWeather sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: String,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &CityQuery) -> Result<WeatherRecord, FetchError> {
        tracing::debug!(city = %city, endpoint = %self.endpoint, "requesting current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", city.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<OwErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| truncate_body(&body));

            return Err(FetchError::Status { status: status.as_u16(), message });
        }

        Ok(WeatherRecord::from_json(&body)?)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
