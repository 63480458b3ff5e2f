//! Core library for the `cityweather` app.
//!
//! This crate defines:
//! - The OpenWeather current-weather client and its error taxonomy
//! - The presenter that turns readings and errors into display strings
//! - The city input state a front end drives
//! - Configuration handling
//!
//! It is used by `cityweather-cli`, but any other front end can drive
//! [`CityField`] the same way.

pub mod config;
pub mod error;
pub mod model;
pub mod presenter;
pub mod provider;
pub mod session;

pub use config::Config;
pub use error::WeatherError;
pub use model::WeatherReading;
pub use presenter::{RenderedWeather, render_error, render_reading};
pub use provider::{WeatherProvider, client_from_config, openweather::WeatherClient};
pub use session::{CityField, Display};
