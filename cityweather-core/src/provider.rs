use crate::{Config, WeatherRecord, error::WeatherError, provider::openweather::OpenWeatherProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city` and render them as a record.
    ///
    /// `city` is passed through as typed; validation happens in the caller.
    async fn current_weather(&self, city: &str) -> Result<WeatherRecord, WeatherError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, WeatherError> {
    let provider = OpenWeatherProvider::with_base_url(config.resolved_api_key(), config.base_url())?;
    Ok(Box::new(provider))
}
