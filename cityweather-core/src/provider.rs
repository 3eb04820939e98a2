use crate::{
    Config, FetchError,
    model::{CityQuery, WeatherRecord},
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current weather for a city name.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Issue exactly one request for `city`.
    async fn fetch_current(&self, city: &CityQuery) -> Result<WeatherRecord, FetchError>;
}

/// Construct the OpenWeather provider from config, honouring a custom base URL
/// and the `OPENWEATHERMAP_API_KEY` override.
pub fn provider_from_config(config: &Config) -> anyhow::Result<OpenWeatherProvider> {
    build_provider(config, config.effective_api_key())
}

fn build_provider(config: &Config, api_key: Option<String>) -> anyhow::Result<OpenWeatherProvider> {
    let api_key = api_key.ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured.\n\
             Hint: run `cityweather configure` or set OPENWEATHERMAP_API_KEY."
        )
    })?;

    let provider = match config.base_url.as_deref() {
        Some(base) => OpenWeatherProvider::with_base_url(api_key, base),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The environment override is bypassed so results don't depend on the shell.
    fn from_file_only(cfg: &Config) -> anyhow::Result<OpenWeatherProvider> {
        build_provider(cfg, cfg.api_key_with_override(None))
    }

    #[test]
    fn provider_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = from_file_only(&cfg).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No API key configured"));
        assert!(msg.contains("Hint: run `cityweather configure`"));
    }

    #[test]
    fn provider_uses_custom_base_url() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some("http://localhost:9999/".into()),
        };

        let provider = from_file_only(&cfg).expect("key is configured");
        assert_eq!(provider.endpoint(), "http://localhost:9999/data/2.5/weather");
    }

    #[test]
    fn provider_defaults_to_public_endpoint() {
        let cfg = Config { api_key: Some("KEY".into()), base_url: None };

        let provider = from_file_only(&cfg).expect("key is configured");
        assert_eq!(provider.endpoint(), "https://api.openweathermap.org/data/2.5/weather");
    }

    #[test]
    fn env_override_supplies_missing_key() {
        let cfg = Config::default();

        let provider = build_provider(&cfg, cfg.api_key_with_override(Some("ENV_KEY")));
        assert!(provider.is_ok());
    }
}
