//! Plain-text rendering of the two views.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::{icon::resolve_icon, model::WeatherRecord, view::ViewState};

pub const INPUT_PROMPT: &str = "Enter a city name to look up the weather.";

const MISSING: &str = "-";

/// Render whichever view `state` selects.
pub fn render(state: &ViewState) -> String {
    match state {
        ViewState::NoWeather => INPUT_PROMPT.to_string(),
        ViewState::HasWeather(record) => render_weather(record),
    }
}

/// Weather view for a single record. Absent fields show as `-`.
pub fn render_weather(record: &WeatherRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}, {}",
        record.city().unwrap_or(MISSING),
        record.country().unwrap_or(MISSING)
    );
    let _ = writeln!(
        out,
        "  icon:        {}",
        record.icon_code().and_then(resolve_icon).unwrap_or(MISSING)
    );
    let _ = writeln!(out, "  conditions:  {}", record.description().unwrap_or(MISSING));
    let _ = writeln!(out, "  temperature: {}", temperature(record));
    let _ = writeln!(out, "  humidity:    {}", with_unit(record.main.humidity, "%"));
    let _ = writeln!(out, "  pressure:    {}", with_unit(record.main.pressure, " hPa"));
    let _ = writeln!(out, "  wind:        {}", with_unit(record.wind.speed, " m/s"));
    let _ = writeln!(out, "  sunrise:     {}", clock(record.sunrise()));
    let _ = write!(out, "  sunset:      {}", clock(record.sunset()));

    out
}

fn temperature(record: &WeatherRecord) -> String {
    match (record.main.temp, record.temp_celsius()) {
        (Some(k), Some(c)) => format!("{k:.2} K ({c:.1} °C)"),
        _ => MISSING.to_string(),
    }
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| format!("{v}{unit}"))
}

fn clock(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| MISSING.to_string(), |t| t.format("%H:%M UTC").to_string())
}
