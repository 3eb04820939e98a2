//! Two-state view model: collecting input, or showing a weather record.

use tokio::sync::Mutex;

use crate::{
    FetchError,
    model::{CityQuery, WeatherRecord},
    provider::WeatherProvider,
    render,
};

/// Which view is visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    NoWeather,
    HasWeather(WeatherRecord),
}

impl ViewState {
    pub fn shows_input(&self) -> bool {
        matches!(self, ViewState::NoWeather)
    }

    pub fn shows_weather(&self) -> bool {
        matches!(self, ViewState::HasWeather(_))
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            ViewState::HasWeather(record) => Some(record),
            ViewState::NoWeather => None,
        }
    }

    /// Fold a fetch outcome into the state.
    ///
    /// Success always lands in `HasWeather`, replacing any earlier record.
    /// Failure is logged and leaves the state untouched; there is no edge back
    /// to `NoWeather`.
    pub fn apply(&mut self, city: &CityQuery, outcome: Result<WeatherRecord, FetchError>) {
        match outcome {
            Ok(record) => {
                tracing::info!(
                    city = %city,
                    name = record.city().unwrap_or_default(),
                    "weather received"
                );
                *self = ViewState::HasWeather(record);
            }
            Err(err) => {
                tracing::error!(city = %city, error = %err, "weather fetch failed");
            }
        }
    }
}

/// One user's search session over a weather provider.
///
/// `search` borrows `&self`, so searches may overlap. Whichever response
/// resolves last decides the state, regardless of issue order.
#[derive(Debug)]
pub struct Session<P> {
    provider: P,
    state: Mutex<ViewState>,
}

impl<P: WeatherProvider> Session<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, state: Mutex::new(ViewState::NoWeather) }
    }

    /// Fetch weather for `query` and apply the outcome.
    ///
    /// Returns `true` when a record was received.
    pub async fn search(&self, query: &CityQuery) -> bool {
        let outcome = self.provider.fetch_current(query).await;
        let ok = outcome.is_ok();

        self.state.lock().await.apply(query, outcome);
        ok
    }

    pub async fn state(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    pub async fn render(&self) -> String {
        render::render(&*self.state.lock().await)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
