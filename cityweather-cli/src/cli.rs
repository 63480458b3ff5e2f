use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use cityweather_core::{CityField, Config, Display, WeatherClient, client_from_config};
use inquire::{InquireError, Password, PasswordDisplayMode, Text};
use tracing::info;

/// Environment variable that overrides the configured API key.
const API_KEY_ENV: &str = "API_KEY";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Command,
}

/// Per-invocation overrides of the config file.
#[derive(Debug, Args)]
pub struct Overrides {
    /// Weather endpoint to query instead of the configured one.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, optionally followed by ", <country code>".
        city: String,
    },

    /// Prompt for cities until the input is cancelled.
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => {
                let client = self.overrides.client()?;
                let mut field = CityField::new(city);
                let ok = matches!(field.submit(&client).await, Display::Weather(_));
                print_display(field.display());

                if !ok {
                    std::process::exit(1);
                }
                Ok(())
            }
            Command::Interactive => {
                let client = self.overrides.client()?;
                interactive(&client).await
            }
        }
    }
}

impl Overrides {
    fn client(&self) -> anyhow::Result<WeatherClient> {
        let mut config = Config::load()?.with_env_api_key(std::env::var(API_KEY_ENV).ok());

        if let Some(base_url) = &self.base_url {
            config.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }

        Ok(client_from_config(&config))
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key.trim().to_string());
    let path = config.save()?;

    info!(path = %path.display(), "saved configuration");
    println!("API key saved to {}", path.display());
    Ok(())
}

async fn interactive(client: &WeatherClient) -> anyhow::Result<()> {
    let mut field = CityField::default();

    loop {
        let input = match Text::new("Enter City Name:").with_initial_value(field.text()).prompt() {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city name"),
        };

        field.set_text(input);
        field.submit(client).await;
        print_display(field.display());
        println!();
    }

    Ok(())
}

fn print_display(display: &Display) {
    match display {
        Display::Idle => {}
        Display::Weather(rendered) => {
            println!("{}", rendered.temperature_text());
            if !rendered.emoji.is_empty() {
                println!("{}", rendered.emoji);
            }
            println!("{}", rendered.description_text);
        }
        Display::Error(message) => eprintln!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_takes_city_and_global_overrides() {
        let cli = Cli::try_parse_from([
            "cityweather",
            "show",
            "Paris, FR",
            "--timeout",
            "3",
            "--base-url",
            "http://localhost:8080/weather",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.overrides.timeout, Some(3));
        assert_eq!(cli.overrides.base_url.as_deref(), Some("http://localhost:8080/weather"));
        match cli.command {
            Command::Show { city } => assert_eq!(city, "Paris, FR"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_city() {
        assert!(Cli::try_parse_from(["cityweather", "show"]).is_err());
    }
}
