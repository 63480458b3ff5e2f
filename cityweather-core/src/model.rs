use serde::{Deserialize, Serialize};

/// One observation of current weather for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature as reported by the provider, in Kelvin.
    pub temperature_kelvin: f64,
    /// Provider condition code, nominally 200..=804.
    pub condition_id: i64,
    pub description: String,
    /// Two-letter country code, empty if the provider sent none.
    pub country_code: String,
}

/// Raw body of the OpenWeather `data/2.5/weather` endpoint.
///
/// Only the fields the app reads are declared.
#[derive(Debug, Deserialize)]
pub(crate) struct OwCurrentResponse {
    pub cod: OwCode,
    pub main: OwMain,
    pub weather: Vec<OwWeather>,
    #[serde(default)]
    pub sys: OwSys,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwMain {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwWeather {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OwSys {
    #[serde(default)]
    pub country: Option<String>,
}

/// OpenWeather sends `cod` as a number on success and as a string on some errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum OwCode {
    Number(i64),
    Text(String),
}

impl OwCode {
    pub fn is_success(&self) -> bool {
        match self {
            OwCode::Number(n) => *n == 200,
            OwCode::Text(s) => s.trim().parse::<i64>() == Ok(200),
        }
    }
}

impl std::fmt::Display for OwCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OwCode::Number(n) => write!(f, "{n}"),
            OwCode::Text(s) => f.write_str(s),
        }
    }
}

impl TryFrom<OwCurrentResponse> for WeatherReading {
    type Error = String;

    fn try_from(parsed: OwCurrentResponse) -> Result<Self, Self::Error> {
        let weather = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| "response contained no weather conditions".to_string())?;

        Ok(WeatherReading {
            temperature_kelvin: parsed.main.temp,
            condition_id: weather.id,
            description: weather.description,
            country_code: parsed.sys.country.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = r#"{
        "coord": {"lon": 2.35, "lat": 48.85},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {"temp": 285.4, "feels_like": 284.9, "humidity": 81},
        "sys": {"country": "FR", "sunrise": 1700000000, "sunset": 1700030000},
        "name": "Paris",
        "cod": 200
    }"#;

    #[test]
    fn parses_current_weather_payload() {
        let parsed: OwCurrentResponse = serde_json::from_str(PARIS).unwrap();
        assert!(parsed.cod.is_success());

        let reading = WeatherReading::try_from(parsed).unwrap();
        assert_eq!(reading.temperature_kelvin, 285.4);
        assert_eq!(reading.condition_id, 500);
        assert_eq!(reading.description, "light rain");
        assert_eq!(reading.country_code, "FR");
    }

    #[test]
    fn missing_country_becomes_empty() {
        let body = r#"{"cod": 200, "main": {"temp": 270.0},
            "weather": [{"id": 600, "description": "snow"}], "sys": {}}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        let reading = WeatherReading::try_from(parsed).unwrap();
        assert_eq!(reading.country_code, "");

        let body = r#"{"cod": 200, "main": {"temp": 270.0},
            "weather": [{"id": 600, "description": "snow"}]}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(WeatherReading::try_from(parsed).unwrap().country_code, "");
    }

    #[test]
    fn empty_weather_list_is_rejected() {
        let body = r#"{"cod": 200, "main": {"temp": 270.0}, "weather": []}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();
        assert!(WeatherReading::try_from(parsed).is_err());
    }

    #[test]
    fn cod_accepts_number_or_string() {
        let num: OwCode = serde_json::from_str("200").unwrap();
        let text: OwCode = serde_json::from_str("\"200\"").unwrap();
        let other: OwCode = serde_json::from_str("\"404\"").unwrap();

        assert!(num.is_success());
        assert!(text.is_success());
        assert!(!other.is_success());
        assert_eq!(other.to_string(), "404");
    }
}
