//! Turns fetch results into the strings a front end displays.
//!
//! Nothing here touches the network or any widget: callers get plain
//! strings and decide how to show them.

use crate::{WeatherError, WeatherReading};

/// Inclusive condition-code ranges and their glyph, scanned in order.
pub const EMOJI_RANGES: &[(i64, i64, &str)] = &[
    (200, 232, "⛈"),
    (300, 321, "🌦"),
    (500, 531, "🌧"),
    (600, 622, "❄"),
    (700, 741, "🌫"),
    (762, 762, "🌋"),
    (771, 771, "💨"),
    (781, 781, "🌪"),
    (800, 800, "☀"),
    (801, 804, "☁"),
];

pub const HTTP_STATUS_MESSAGES: &[(u16, &str)] = &[
    (400, "Bad Request\nPlease check your city name"),
    (401, "Unauthorized\nPlease check your API key"),
    (403, "Forbidden\nPlease check your API key"),
    (404, "Not Found\nPlease check your city name"),
    (500, "Internal Server Error\nPlease try again later"),
    (502, "Bad Gateway\nInvalid Response from Server"),
    (503, "Service Unavailable\nServer is down"),
    (504, "Gateway Timeout\nNo response from server"),
];

const KELVIN_OFFSET: f64 = 273.15;

/// Display strings for a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedWeather {
    pub celsius_text: String,
    pub fahrenheit_text: String,
    pub emoji: String,
    pub description_text: String,
    /// Text to append to the city input, if it should change.
    pub country_suffix: Option<String>,
}

impl RenderedWeather {
    /// Both temperatures on two lines, Celsius first.
    pub fn temperature_text(&self) -> String {
        format!("{}\n{}", self.celsius_text, self.fahrenheit_text)
    }
}

/// Render a reading; `input_text` is the current, untrimmed city input.
pub fn render_reading(reading: &WeatherReading, input_text: &str) -> RenderedWeather {
    RenderedWeather {
        celsius_text: format!("{:.0}°C", kelvin_to_celsius(reading.temperature_kelvin)),
        fahrenheit_text: format!("{:.0}°F", kelvin_to_fahrenheit(reading.temperature_kelvin)),
        emoji: emoji_for(reading.condition_id).to_string(),
        description_text: capitalize_first(&reading.description),
        country_suffix: country_suffix(input_text, &reading.country_code),
    }
}

pub fn render_error(error: &WeatherError) -> String {
    match error {
        WeatherError::EmptyInput => "Please enter a city name.".to_string(),
        WeatherError::HttpStatus(code) => http_status_message(*code),
        WeatherError::ConnectionFailure => {
            "Connection Error\nPlease check your internet connection".to_string()
        }
        WeatherError::OtherRequestFailure(detail) => format!("Request Error: {detail}"),
    }
}

pub fn http_status_message(code: u16) -> String {
    HTTP_STATUS_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| message.to_string())
        .unwrap_or_else(|| format!("An error occurred: {code}"))
}

/// First matching glyph, or `""` when no range covers `condition_id`.
pub fn emoji_for(condition_id: i64) -> &'static str {
    first_match(EMOJI_RANGES, condition_id).unwrap_or("")
}

fn first_match<'a>(table: &[(i64, i64, &'a str)], value: i64) -> Option<&'a str> {
    table
        .iter()
        .find(|(low, high, _)| (*low..=*high).contains(&value))
        .map(|(_, _, glyph)| *glyph)
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin * 9.0 / 5.0) - 459.67
}

/// Uppercase the first character only; the rest is left as is.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `Some(", CC")` when the input has no comma yet.
pub fn country_suffix(input_text: &str, country_code: &str) -> Option<String> {
    if input_text.contains(',') {
        None
    } else {
        Some(format!(", {country_code}"))
    }
}
