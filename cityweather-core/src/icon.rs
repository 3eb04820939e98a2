//! Condition code to icon path lookup.
//!
//! Codes are the provider's `weather[].icon` values: two digits for the sky
//! condition and a `d`/`n` suffix for day or night.

/// Path prefix every icon lives under.
pub const ICON_PREFIX: &str = "/icons/";

const ICONS: [(&str, &str); 12] = [
    ("01d", "/icons/sunny.svg"),
    ("02d", "/icons/day.svg"),
    ("03d", "/icons/cloudy.svg"),
    ("04d", "/icons/perfect-day.svg"),
    ("09d", "/icons/rain.svg"),
    ("10d", "/icons/rain.svg"),
    ("11d", "/icons/storm.svg"),
    ("01n", "/icons/night.svg"),
    ("02n", "/icons/cloudy-night.svg"),
    ("03n", "/icons/cloudy-night.svg"),
    ("04n", "/icons/overcast-night.svg"),
    ("10n", "/icons/rain-night.svg"),
];

/// Icon path for `code`, or `None` when the code is not mapped.
///
/// Matching is exact and case-sensitive.
pub fn resolve_icon(code: &str) -> Option<&'static str> {
    ICONS.iter().find(|(c, _)| *c == code).map(|(_, path)| *path)
}

/// All mapped codes, in table order.
pub fn known_codes() -> impl Iterator<Item = &'static str> {
    ICONS.iter().map(|(code, _)| *code)
}
