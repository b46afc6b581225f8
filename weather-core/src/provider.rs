use std::{fmt::Debug, sync::Arc};

use async_trait::async_trait;

use crate::{Config, FetchError, WeatherSnapshot, provider::openweather::OpenWeatherProvider};

pub mod openweather;

/// Source of current conditions for a city.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError>;
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = OpenWeatherProvider::from_config(config)?;
    Ok(Arc::new(provider))
}
