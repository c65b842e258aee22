use crate::{
    Config, DashboardError, LocationQuery, WeatherReport,
    provider::openweather::OpenWeatherProvider,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Source of current conditions plus the raw 3-hour forecast.
///
/// Implementations fetch both halves concurrently and fail as a whole if
/// either half fails.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch(&self, query: &LocationQuery) -> Result<WeatherReport, DashboardError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherProvider::with_endpoints(
        api_key,
        config.weather_url(),
        config.forecast_url(),
    )))
}
