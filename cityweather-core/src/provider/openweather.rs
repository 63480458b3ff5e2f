use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::{
    error::WeatherError,
    model::{OwCurrentResponse, WeatherReading},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather current-weather endpoint.
///
/// Holds no per-request state: every [`WeatherClient::fetch`] issues exactly
/// one GET, with no retry and no caching.
#[derive(Clone)]
pub struct WeatherClient {
    api_key: String,
    base_url: String,
    timeout: Duration,
    http: Client,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_http(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyInput);
        }

        debug!("requesting current weather");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|err| transport_failure(&err))?;

        let status = res.status();
        if !status.is_success() {
            warn!(%status, "weather service rejected the request");
            return Err(WeatherError::HttpStatus(status.as_u16()));
        }

        let body = res.text().await.map_err(|err| transport_failure(&err))?;
        debug!(bytes = body.len(), "received weather response");

        let parsed: OwCurrentResponse = serde_json::from_str(&body).map_err(|err| {
            warn!(error = %err, body = %truncate_body(&body), "malformed weather response");
            WeatherError::OtherRequestFailure(format!("Invalid response from server: {err}"))
        })?;

        if !parsed.cod.is_success() {
            warn!(cod = %parsed.cod, "weather response carried a failure code");
            return Err(WeatherError::OtherRequestFailure(format!(
                "Unexpected response code: {}",
                parsed.cod
            )));
        }

        WeatherReading::try_from(parsed).map_err(|detail| {
            warn!(%detail, "incomplete weather response");
            WeatherError::OtherRequestFailure(detail)
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherReading, WeatherError> {
        WeatherClient::fetch(self, city).await
    }
}

fn transport_failure(err: &reqwest::Error) -> WeatherError {
    let classified = WeatherError::from_transport(err);
    warn!(error = %err, "weather request failed");
    classified
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
