//! Core library for the `cityweather` app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The weather fetcher and its provider abstraction
//! - Condition-code to icon resolution
//! - The two-state view model and its text rendering
//!
//! It is used by `cityweather-cli`, but can also be reused by other front ends.

pub mod config;
pub mod error;
pub mod icon;
pub mod model;
pub mod provider;
pub mod render;
pub mod view;

pub use config::Config;
pub use error::FetchError;
pub use icon::resolve_icon;
pub use model::{CityQuery, WeatherRecord};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use view::{Session, ViewState};
