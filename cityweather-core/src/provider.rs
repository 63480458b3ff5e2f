use crate::{Config, WeatherError, WeatherReading, provider::openweather::WeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

pub mod openweather;

/// Anything that can answer "what is the weather in this city right now".
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, WeatherError>;
}

/// Construct the OpenWeather client from resolved configuration.
///
/// A missing API key is not an error here; the provider will answer 401.
pub fn client_from_config(config: &Config) -> WeatherClient {
    if config.api_key().is_empty() {
        warn!("no API key configured; requests will be rejected as unauthorized");
    }

    WeatherClient::new(config.api_key())
        .with_base_url(config.base_url())
        .with_timeout(config.timeout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::openweather::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
    use std::time::Duration;

    #[test]
    fn client_from_default_config_uses_defaults() {
        let client = client_from_config(&Config::default());

        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn client_from_config_applies_overrides() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            base_url: Some("http://localhost:1234/weather".into()),
            timeout_secs: Some(2),
        };

        let client = client_from_config(&cfg);
        assert_eq!(client.base_url(), "http://localhost:1234/weather");
        assert_eq!(client.timeout(), Duration::from_secs(2));
    }
}
