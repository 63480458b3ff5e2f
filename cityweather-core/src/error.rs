use thiserror::Error;

/// Every way a single weather fetch can fail.
///
/// The set is closed: the presenter maps each variant to exactly one
/// user-facing message, see [`crate::presenter::render_error`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("city name is empty")]
    EmptyInput,

    #[error("weather service responded with HTTP status {0}")]
    HttpStatus(u16),

    #[error("could not connect to the weather service")]
    ConnectionFailure,

    #[error("weather request failed: {0}")]
    OtherRequestFailure(String),
}

impl WeatherError {
    /// Classify a transport-level failure from `reqwest`.
    ///
    /// Connect errors (DNS, refused, unreachable, connect timeout) are a
    /// `ConnectionFailure`; everything else keeps its detail text.
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_connect() {
            WeatherError::ConnectionFailure
        } else if let Some(status) = err.status() {
            WeatherError::HttpStatus(status.as_u16())
        } else {
            WeatherError::OtherRequestFailure(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_request_detail() {
        let err = WeatherError::OtherRequestFailure("operation timed out".into());
        assert_eq!(err.to_string(), "weather request failed: operation timed out");
    }

    #[test]
    fn display_includes_status_code() {
        assert!(WeatherError::HttpStatus(404).to_string().contains("404"));
    }
}
