use tracing::debug;

use crate::{
    WeatherProvider,
    presenter::{self, RenderedWeather},
};

/// What the front end is currently showing below the city input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Idle,
    Weather(RenderedWeather),
    /// Only the message is shown; emoji and description are cleared.
    Error(String),
}

impl Display {
    pub fn emoji(&self) -> &str {
        match self {
            Display::Weather(rendered) => &rendered.emoji,
            Display::Idle | Display::Error(_) => "",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Display::Weather(rendered) => &rendered.description_text,
            Display::Idle | Display::Error(_) => "",
        }
    }
}

/// The city input plus whatever the last submission produced.
///
/// Each [`CityField::submit`] runs one fetch to completion; the only state
/// carried between submissions is the input text, which may have grown a
/// country suffix.
#[derive(Debug, Clone, Default)]
pub struct CityField {
    text: String,
    display: Display,
}

impl CityField {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), display: Display::Idle }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn display(&self) -> &Display {
        &self.display
    }

    pub async fn submit(&mut self, provider: &dyn WeatherProvider) -> &Display {
        let city = self.text.trim().to_string();

        self.display = match provider.fetch(&city).await {
            Ok(reading) => {
                let rendered = presenter::render_reading(&reading, &self.text);
                if let Some(suffix) = &rendered.country_suffix {
                    self.text.push_str(suffix);
                }
                debug!(city = %city, field = %self.text, "displaying weather");
                Display::Weather(rendered)
            }
            Err(err) => Display::Error(presenter::render_error(&err)),
        };

        &self.display
    }
}
