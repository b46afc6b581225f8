use std::fmt;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::{
    Config, FetchError,
    model::{CurrentWeather, WeatherSnapshot},
};

use super::WeatherProvider;

/// Client for the OpenWeather "current weather" endpoint.
#[derive(Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    /// Build a provider from config. The API key comes from the environment
    /// or the config file, in that order.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.resolve_api_key()?;

        let http = Client::builder()
            .timeout(config.timeout())
            .build()
            .context("Failed to build HTTP client for OpenWeather")?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/weather", self.base_url)
    }
}

impl fmt::Debug for OpenWeatherProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenWeatherProvider")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, city: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!(city, "requesting current weather");

        let res = self
            .http
            .get(self.endpoint())
            .query(&[
                ("q", city),
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
                ("lang", "tr"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::HttpStatus { status, body: truncate_body(&body) });
        }

        let parsed: CurrentWeather = serde_json::from_str(&body)?;

        Ok(WeatherSnapshot::from_current(parsed, Utc::now()))
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            api_key: Some("SECRET".into()),
            base_url: "http://localhost:9/data/2.5/".into(),
            ..Config::default()
        }
    }

    #[test]
    fn endpoint_drops_trailing_slash() {
        let provider = OpenWeatherProvider::from_config(&config()).expect("provider");

        assert_eq!(provider.endpoint(), "http://localhost:9/data/2.5/weather");
    }

    #[test]
    fn debug_output_hides_api_key() {
        // The env override may replace the key; either way it must not leak.
        let provider = OpenWeatherProvider::from_config(&config()).expect("provider");
        let printed = format!("{provider:?}");

        assert!(!printed.contains(&provider.api_key));
        assert!(printed.contains("<redacted>"));
    }

    #[test]
    fn truncate_keeps_short_bodies() {
        assert_eq!(truncate_body("not found"), "not found");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let body = "ş".repeat(250);
        let cut = truncate_body(&body);

        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), 203);
    }
}
